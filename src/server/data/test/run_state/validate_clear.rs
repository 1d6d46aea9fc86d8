use super::*;

/// Tests validation with fewer kills than required.
///
/// Expected: Err(ClearIncomplete)
#[tokio::test]
async fn fails_below_requirement() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();

    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();

    assert!(matches!(
        repo.validate_clear(1).await,
        Err(RunError::ClearIncomplete {
            killed: 1,
            required: 2,
            ..
        })
    ));
}

/// Tests validation with exactly the required kills.
///
/// Verifies that only items with a positive count are returned and the run remains.
///
/// Expected: Ok with stage 1 and the obtained potions
#[tokio::test]
async fn passes_on_exact_match() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();

    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    repo.record_item_obtain(1, fixture::POTION, 2).await.unwrap();

    let cleared = repo.validate_clear(1).await.unwrap();

    assert_eq!(cleared.stage_code, fixture::STAGE_ONE);
    assert_eq!(cleared.items, vec![RewardItem::new(fixture::POTION, 2)]);
    assert_eq!(repo.active_stage(1).await.unwrap(), Some(fixture::STAGE_ONE));
}

/// Tests a run whose kill counts were tampered with in the store.
///
/// Verifies the equality check rejects overkill even if it bypassed the ceiling.
///
/// Expected: Err(ClearIncomplete) with the excess count
#[tokio::test]
async fn fails_above_requirement() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();

    let tampered = format!(
        r#"{{"stage_code":{},"entries":{{"{}":{{"count":3,"ceiling":2}}}}}}"#,
        fixture::STAGE_ONE,
        fixture::SLIME
    );
    store.set(&enemies_key(1), tampered, None).await.unwrap();

    assert!(matches!(
        repo.validate_clear(1).await,
        Err(RunError::ClearIncomplete { killed: 3, .. })
    ));
}

/// Tests validation without a run.
///
/// Expected: Err(NoActiveRun)
#[tokio::test]
async fn requires_active_run() {
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);

    assert!(matches!(
        repo.validate_clear(1).await,
        Err(RunError::NoActiveRun)
    ));
}

/// Tests a run whose two keys belong to different stages.
///
/// Expected: Err(NoActiveRun) rather than a stage mismatch
#[tokio::test]
async fn treats_disagreeing_keys_as_absent() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();
    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();

    let foreign = format!(
        r#"{{"stage_code":{},"entries":{{"{}":{{"count":0,"ceiling":1}}}}}}"#,
        fixture::STAGE_TWO,
        fixture::SWORD
    );
    store.set(&items_key(1), foreign, None).await.unwrap();

    assert!(matches!(
        repo.validate_clear(1).await,
        Err(RunError::NoActiveRun)
    ));
}
