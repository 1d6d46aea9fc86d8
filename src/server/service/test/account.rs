use super::*;

/// Tests creating an account.
///
/// Verifies that the progress row, the attendance row and every starter item are created
/// through the kind-specific grant path.
///
/// Expected: level 1, starter gold as money, one row per starter equipment and stack
#[tokio::test]
async fn creates_account_with_starter_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();

    let account = AccountService::new(db, &catalog).create(7).await.unwrap();

    assert_eq!(account.progress.level, 1);
    assert_eq!(account.progress.money, fixture::STARTER_GOLD);
    let codes: Vec<_> = account.items.iter().map(|item| item.item_code).collect();
    assert_eq!(
        codes,
        vec![fixture::SWORD, fixture::LEATHER_ARMOR, fixture::POTION]
    );
    assert_eq!(account.items[0].attack, fixture::SWORD_ATTACK);
    assert_eq!(account.items[1].defence, fixture::ARMOR_DEFENCE);

    let attendance = entity::prelude::Attendance::find_by_id(7_i64).one(db).await?;
    assert!(attendance.is_some());

    Ok(())
}

/// Tests creating an account twice.
///
/// Expected: Err(AlreadyExists) and no extra starter items
#[tokio::test]
async fn rejects_duplicate_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let service = AccountService::new(db, &catalog);

    service.create(7).await.unwrap();
    let result = service.create(7).await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::AlreadyExists(7)))
    ));
    let account = service.load(7).await.unwrap();
    assert_eq!(account.items.len(), 3);
    assert_eq!(account.progress.money, fixture::STARTER_GOLD);

    Ok(())
}

/// Tests loading an account that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn load_fails_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();

    let result = AccountService::new(db, &catalog).load(404).await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::NotFound(404)))
    ));

    Ok(())
}

/// Tests listing clear records.
///
/// Expected: records of the account only, ordered by stage
#[tokio::test]
async fn lists_clear_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();

    let account = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    factory::create_clear_record(db, account.account_id, fixture::STAGE_TWO, 1, 900).await?;
    factory::create_clear_record(db, account.account_id, fixture::STAGE_ONE, 3, 500).await?;
    factory::create_clear_record(db, other.account_id, fixture::STAGE_ONE, 1, 100).await?;

    let records = AccountService::new(db, &catalog)
        .clear_records(account.account_id)
        .await
        .unwrap();

    let stages: Vec<_> = records.iter().map(|record| record.stage_code).collect();
    assert_eq!(stages, vec![fixture::STAGE_ONE, fixture::STAGE_TWO]);

    Ok(())
}
