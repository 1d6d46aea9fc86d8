use super::*;

/// Tests recording a receipt.
///
/// Expected: Ok and the receipt can be found by id
#[tokio::test]
async fn records_receipt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .with_table(PurchaseReceipt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = PurchaseRepository::new(db);
    repo.create("receipt-1", account.account_id, fixture::PRODUCT_SWORD)
        .await?;

    let stored = repo.find("receipt-1").await?.unwrap();
    assert_eq!(stored.account_id, account.account_id);
    assert_eq!(stored.product_code, fixture::PRODUCT_SWORD);
    assert!(repo.find("receipt-2").await?.is_none());

    Ok(())
}

/// Tests recording the same receipt twice.
///
/// Expected: Err on primary key conflict
#[tokio::test]
async fn rejects_duplicate_receipt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AccountProgress)
        .with_table(PurchaseReceipt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = PurchaseRepository::new(db);
    repo.create("dup", account.account_id, fixture::PRODUCT_SWORD)
        .await?;
    let result = repo
        .create("dup", account.account_id, fixture::PRODUCT_SWORD)
        .await;

    assert!(result.is_err());

    Ok(())
}
