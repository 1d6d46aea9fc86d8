use super::*;

/// Tests adding and spending money.
///
/// Expected: balance reflects both deltas
#[tokio::test]
async fn adds_and_spends_money() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .money(50)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let updated = repo.add_money(account.account_id, 25).await?.unwrap();
    assert_eq!(updated.money, 75);

    let updated = repo.add_money(account.account_id, -30).await?.unwrap();
    assert_eq!(updated.money, 45);

    Ok(())
}

/// Tests adding money to an account without a progress row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let result = repo.add_money(404, 10).await?;

    assert!(result.is_none());

    Ok(())
}
