use super::*;

/// Tests inserting a first clear record.
///
/// Expected: Ok and the record can be found by (account, stage)
#[tokio::test]
async fn inserts_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = ClearRecordRepository::new(db);
    repo.insert(account.account_id, 1, 2, 30_000).await?;

    let record = repo.find(account.account_id, 1).await?.unwrap();
    assert_eq!(record.rank, 2);
    assert_eq!(record.clear_time_ms, 30_000);
    assert!(repo.find(account.account_id, 2).await?.is_none());

    Ok(())
}

/// Tests inserting a second record for the same stage.
///
/// Expected: Err on composite primary key conflict
#[tokio::test]
async fn rejects_duplicate_stage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    factory::create_clear_record(db, account.account_id, 1, 1, 10_000).await?;

    let repo = ClearRecordRepository::new(db);
    let result = repo.insert(account.account_id, 1, 3, 5_000).await;

    assert!(result.is_err());

    Ok(())
}
