use super::*;

/// Tests inserting an equipment unit.
///
/// Verifies that the row copies the catalog stats and starts unenhanced.
///
/// Expected: Ok with count 1 and catalog attack
#[tokio::test]
async fn inserts_unit_with_catalog_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = catalog();
    let account = factory::create_account(db).await?;

    let repo = ItemRepository::new(db);
    let sword = repo
        .insert_unit(account.account_id, catalog.item(fixture::SWORD).unwrap())
        .await?;

    assert_eq!(sword.count, 1);
    assert_eq!(sword.enhance_level, 0);
    assert_eq!(sword.attack, fixture::SWORD_ATTACK);
    assert!(!sword.destroyed);

    Ok(())
}

/// Tests that each unit gets its own row.
///
/// Expected: two distinct rows
#[tokio::test]
async fn each_unit_is_a_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = catalog();
    let account = factory::create_account(db).await?;
    let definition = catalog.item(fixture::LEATHER_ARMOR).unwrap();

    let repo = ItemRepository::new(db);
    let first = repo.insert_unit(account.account_id, definition).await?;
    let second = repo.insert_unit(account.account_id, definition).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_by_account(account.account_id).await?.len(), 2);

    Ok(())
}
