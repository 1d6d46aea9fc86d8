use super::*;

/// Tests soft deleting an item.
///
/// Verifies that the row remains but is excluded from lookups.
///
/// Expected: destroyed flag set, item no longer listed or found
#[tokio::test]
async fn destroyed_item_is_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let item = factory::create_item(db, account.account_id, fixture::SWORD, 1).await?;

    let repo = ItemRepository::new(db);
    let destroyed = repo.destroy(item.clone()).await?;

    assert!(destroyed.destroyed);
    assert!(repo.find_owned(account.account_id, item.id).await?.is_none());
    assert!(repo.get_by_account(account.account_id).await?.is_empty());

    Ok(())
}

/// Tests storing an enhancement result.
///
/// Expected: level and stats updated
#[tokio::test]
async fn stores_enhancement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let item = factory::item::ItemFactory::new(db, account.account_id, fixture::SWORD)
        .attack(10)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    let enhanced = repo.set_enhancement(item, 1, 11, 0).await?;

    assert_eq!(enhanced.enhance_level, 1);
    assert_eq!(enhanced.attack, 11);

    Ok(())
}
