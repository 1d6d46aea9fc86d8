use super::*;

/// Tests overwriting an existing record.
///
/// Expected: rank and time replaced
#[tokio::test]
async fn overwrites_rank_and_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    factory::create_clear_record(db, account.account_id, 1, 1, 10_000).await?;

    let repo = ClearRecordRepository::new(db);
    let updated = repo.update(account.account_id, 1, 3, 8_000).await?;

    assert_eq!(updated.rank, 3);
    assert_eq!(updated.clear_time_ms, 8_000);

    Ok(())
}
