use super::*;

/// Tests listing every record of an account.
///
/// Verifies that records are ordered by stage and other accounts' records are excluded.
///
/// Expected: Ok with two records in stage order
#[tokio::test]
async fn lists_records_in_stage_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    factory::create_clear_record(db, account.account_id, 2, 1, 10_000).await?;
    factory::create_clear_record(db, account.account_id, 1, 3, 9_000).await?;
    factory::create_clear_record(db, other.account_id, 1, 1, 1_000).await?;

    let repo = ClearRecordRepository::new(db);
    let records = repo.get_by_account(account.account_id).await?;

    let stages: Vec<i64> = records.iter().map(|r| r.stage_code).collect();
    assert_eq!(stages, vec![1, 2]);

    Ok(())
}
