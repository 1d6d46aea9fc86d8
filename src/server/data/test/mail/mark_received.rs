use super::*;

/// Tests flipping the received flag of an attachment.
///
/// Expected: item marked received, sibling untouched
#[tokio::test]
async fn marks_single_item_received() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mail_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let mail = factory::create_mail(db, account.account_id).await?;
    let first = factory::create_mail_item(db, mail.id, fixture::GOLD, 10).await?;
    factory::create_mail_item(db, mail.id, fixture::POTION, 1).await?;

    let repo = MailRepository::new(db);
    repo.mark_received(first).await?;

    let items = repo.get_items(mail.id).await?;
    assert!(items[0].received);
    assert!(!items[1].received);

    Ok(())
}

/// Tests closing a mail's attachment.
///
/// Expected: attachment flag cleared and mail marked read
#[tokio::test]
async fn closes_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mail_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let mail = factory::create_mail(db, account.account_id).await?;

    let repo = MailRepository::new(db);
    let closed = repo.close_attachment(mail).await?;

    assert!(!closed.has_attachment);
    assert!(closed.is_read);

    Ok(())
}
