use super::*;

/// Tests finding an item owned by the account.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_owned_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let item = factory::create_item(db, account.account_id, fixture::SWORD, 1).await?;

    let repo = ItemRepository::new(db);
    let found = repo.find_owned(account.account_id, item.id).await?;

    assert_eq!(found.map(|i| i.id), Some(item.id));

    Ok(())
}

/// Tests that another account's item is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_other_accounts_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    let item = factory::create_item(db, owner.account_id, fixture::SWORD, 1).await?;

    let repo = ItemRepository::new(db);
    let found = repo.find_owned(other.account_id, item.id).await?;

    assert!(found.is_none());

    Ok(())
}
