use super::*;

/// Tests that deleted and foreign mail are not found.
///
/// Expected: only the owner's undeleted mail is returned
#[tokio::test]
async fn finds_only_owned_live_mail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mail_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    let mail = factory::create_mail(db, owner.account_id).await?;
    let deleted = factory::mail::MailFactory::new(db, owner.account_id)
        .deleted(true)
        .build()
        .await?;

    let repo = MailRepository::new(db);

    assert!(repo.find_owned(owner.account_id, mail.id).await?.is_some());
    assert!(repo.find_owned(other.account_id, mail.id).await?.is_none());
    assert!(repo.find_owned(owner.account_id, deleted.id).await?.is_none());

    Ok(())
}

/// Tests soft deleting a mail.
///
/// Expected: mail no longer found after deletion
#[tokio::test]
async fn soft_deleted_mail_is_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mail_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let mail = factory::create_mail(db, account.account_id).await?;

    let repo = MailRepository::new(db);
    repo.soft_delete(mail.clone()).await?;

    assert!(repo.find_owned(account.account_id, mail.id).await?.is_none());

    Ok(())
}
