use super::*;

/// Tests starting a run.
///
/// Verifies that both keys are written with zero progress for every stage code.
///
/// Expected: Ok with the run's stage readable
#[tokio::test]
async fn starts_run_with_zero_progress() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);

    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();

    assert_eq!(repo.active_stage(1).await.unwrap(), Some(fixture::STAGE_ONE));
    assert!(store.get(&items_key(1)).await.unwrap().is_some());
    let cleared = repo.validate_clear(1).await;
    assert!(matches!(cleared, Err(RunError::ClearIncomplete { killed: 0, .. })));
}

/// Tests starting a run while one is active.
///
/// Verifies that the stale run is torn down instead of resumed.
///
/// Expected: Err(AlreadyInProgress) and no run left afterwards
#[tokio::test]
async fn discards_existing_run() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    let stage = catalog.stage(fixture::STAGE_ONE).unwrap();

    repo.start(1, stage).await.unwrap();
    let result = repo.start(1, stage).await;

    assert!(matches!(result, Err(RunError::AlreadyInProgress)));
    assert_eq!(repo.active_stage(1).await.unwrap(), None);
    assert!(store.get(&items_key(1)).await.unwrap().is_none());

    repo.start(1, stage).await.unwrap();
}

/// Tests the rollback of a half-written run.
///
/// Verifies that when the second key write fails, the first key is removed.
///
/// Expected: Err(Store) and neither key present
#[tokio::test]
async fn rolls_back_partial_write() {
    let catalog = catalog();
    let store = FlakyStore::failing_after(1);
    let repo = RunStateRepository::new(&store, RUN_TTL);

    let result = repo
        .start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await;

    assert!(matches!(result, Err(RunError::Store(_))));
    assert!(store.inner.get(&enemies_key(1)).await.unwrap().is_none());
    assert!(store.inner.get(&items_key(1)).await.unwrap().is_none());
}

/// Tests starting a run with an unreachable store.
///
/// Expected: Err(Store)
#[tokio::test]
async fn fails_when_store_unavailable() {
    let catalog = catalog();
    let repo = RunStateRepository::new(&UnavailableStore, RUN_TTL);

    let result = repo
        .start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await;

    assert!(matches!(result, Err(RunError::Store(_))));
}
