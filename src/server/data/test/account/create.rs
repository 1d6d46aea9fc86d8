use super::*;

/// Tests creating a progress row for a new account.
///
/// Verifies that the row starts at level 1 with no exp, money or cleared stages.
///
/// Expected: Ok with default progress
#[tokio::test]
async fn creates_default_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let progress = repo.create(77).await?;

    assert_eq!(progress.account_id, 77);
    assert_eq!(progress.level, 1);
    assert_eq!(progress.exp, 0);
    assert_eq!(progress.money, 0);
    assert_eq!(progress.stages_cleared, 0);

    let stored = AccountProgress::find_by_id(77).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating the same account twice.
///
/// Expected: Err on primary key conflict
#[tokio::test]
async fn fails_for_duplicate_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.create(5).await?;
    let result = repo.create(5).await;

    assert!(result.is_err());

    Ok(())
}
