use super::*;

/// Tests the first grant of a stackable item.
///
/// Expected: Ok with a new row holding the full count
#[tokio::test]
async fn creates_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = ItemRepository::new(db);
    let stack = repo
        .add_to_stack(account.account_id, fixture::POTION, 3)
        .await?;

    assert_eq!(stack.item_code, fixture::POTION);
    assert_eq!(stack.count, 3);

    Ok(())
}

/// Tests merging into an existing stack.
///
/// Verifies that a second grant increments the same row instead of adding one.
///
/// Expected: Ok with one row holding the combined count
#[tokio::test]
async fn merges_into_existing_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let existing = factory::create_item(db, account.account_id, fixture::POTION, 2).await?;

    let repo = ItemRepository::new(db);
    let stack = repo
        .add_to_stack(account.account_id, fixture::POTION, 5)
        .await?;

    assert_eq!(stack.id, existing.id);
    assert_eq!(stack.count, 7);
    assert_eq!(repo.get_by_account(account.account_id).await?.len(), 1);

    Ok(())
}

/// Tests that destroyed rows are not merged into.
///
/// Expected: Ok with a fresh row
#[tokio::test]
async fn ignores_destroyed_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let destroyed = factory::item::ItemFactory::new(db, account.account_id, fixture::STONE)
        .count(4)
        .destroyed(true)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let stack = repo
        .add_to_stack(account.account_id, fixture::STONE, 1)
        .await?;

    assert_ne!(stack.id, destroyed.id);
    assert_eq!(stack.count, 1);

    Ok(())
}
