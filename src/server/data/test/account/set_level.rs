use super::*;

/// Tests persisting level and exp together.
///
/// Expected: both fields written, money untouched
#[tokio::test]
async fn persists_level_and_exp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .money(10)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    repo.set_level(account.clone(), 3, 12).await?;

    let stored = repo.find(account.account_id).await?.unwrap();
    assert_eq!(stored.level, 3);
    assert_eq!(stored.exp, 12);
    assert_eq!(stored.money, 10);

    Ok(())
}

/// Tests incrementing the cleared stage counter.
///
/// Expected: counter goes from 0 to 2 after two increments
#[tokio::test]
async fn increments_stages_cleared() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AccountRepository::new(db);
    repo.increment_stages_cleared(account.account_id).await?;
    let updated = repo
        .increment_stages_cleared(account.account_id)
        .await?
        .unwrap();

    assert_eq!(updated.stages_cleared, 2);

    Ok(())
}
