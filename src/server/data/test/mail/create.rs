use super::*;

/// Tests creating a mail record with attachments.
///
/// Expected: Ok with attachment flag set and items linked to the mail
#[tokio::test]
async fn creates_mail_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mail_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let reward = RewardMail::system(
        "Reward",
        "Thanks for playing",
        vec![RewardItem::new(fixture::GOLD, 100)],
        Utc::now() + Duration::days(7),
    );

    let repo = MailRepository::new(db);
    let mail = repo.create(account.account_id, &reward).await?;
    repo.add_item(mail.id, reward.items[0]).await?;

    assert!(mail.has_attachment);
    assert!(!mail.is_read);
    assert_eq!(mail.sender, "System");

    let items = repo.get_items(mail.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].count, 100);
    assert!(!items[0].received);

    Ok(())
}

/// Tests creating a mail without items.
///
/// Expected: attachment flag not set
#[tokio::test]
async fn mail_without_items_has_no_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mail_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let notice = RewardMail::system("Notice", "Maintenance", vec![], Utc::now());

    let repo = MailRepository::new(db);
    let mail = repo.create(account.account_id, &notice).await?;

    assert!(!mail.has_attachment);

    Ok(())
}
