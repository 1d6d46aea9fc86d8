use super::*;

async fn started(store: &MemoryStore, catalog: &Catalog, stage_code: i64) {
    RunStateRepository::new(store, RUN_TTL)
        .start(1, catalog.stage(stage_code).unwrap())
        .await
        .unwrap();
}

/// Tests recording kills up to the ceiling.
///
/// Expected: each kill increments by one until the required count
#[tokio::test]
async fn records_kills() {
    let catalog = catalog();
    let store = MemoryStore::new();
    started(&store, &catalog, fixture::STAGE_ONE).await;
    let repo = RunStateRepository::new(&store, RUN_TTL);

    let first = repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    let second = repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();

    assert_eq!(first.count, 1);
    assert_eq!(second.count, 2);
    assert_eq!(second.ceiling, 2);
}

/// Tests a kill past the ceiling.
///
/// Verifies that the rejected kill leaves the stored count unchanged.
///
/// Expected: Err(CeilingExceeded) and the run still clears with exactly two kills
#[tokio::test]
async fn rejects_kill_past_ceiling() {
    let catalog = catalog();
    let store = MemoryStore::new();
    started(&store, &catalog, fixture::STAGE_ONE).await;
    let repo = RunStateRepository::new(&store, RUN_TTL);

    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    let result = repo.record_enemy_kill(1, fixture::SLIME).await;

    assert!(matches!(
        result,
        Err(RunError::CeilingExceeded { code, ceiling: 2 }) if code == fixture::SLIME
    ));
    assert!(repo.validate_clear(1).await.is_ok());
}

/// Tests an obtain that would overshoot the per-stage max.
///
/// Expected: Err(CeilingExceeded) and the earlier count kept
#[tokio::test]
async fn rejects_obtain_past_ceiling() {
    let catalog = catalog();
    let store = MemoryStore::new();
    started(&store, &catalog, fixture::STAGE_ONE).await;
    let repo = RunStateRepository::new(&store, RUN_TTL);

    repo.record_item_obtain(1, fixture::POTION, 2).await.unwrap();
    let result = repo.record_item_obtain(1, fixture::POTION, 2).await;
    let last = repo.record_item_obtain(1, fixture::POTION, 1).await.unwrap();

    assert!(matches!(result, Err(RunError::CeilingExceeded { .. })));
    assert_eq!(last.count, 3);
}

/// Tests that no sequence of events pushes a count past its ceiling.
///
/// Expected: stored counts never exceed ceilings, rejected calls change nothing
#[tokio::test]
async fn counts_never_exceed_ceiling() {
    let catalog = catalog();
    let store = MemoryStore::new();
    started(&store, &catalog, fixture::STAGE_TWO).await;
    let repo = RunStateRepository::new(&store, RUN_TTL);

    let mut accepted = 0;
    for amount in [1, 2, 1, 1, 3, 1] {
        if repo.record_item_obtain(1, fixture::POTION, amount).await.is_ok() {
            accepted += amount;
        }
        assert!(accepted <= 2);
    }
    for _ in 0..5 {
        let _ = repo.record_enemy_kill(1, fixture::GOLEM).await;
    }

    let cleared = repo.validate_clear(1).await;
    assert!(matches!(cleared, Err(RunError::ClearIncomplete { enemy_code, .. }) if enemy_code == fixture::SLIME));
    assert_eq!(accepted, 2);
}

/// Tests events for codes outside the stage.
///
/// Expected: Err(UnknownEnemy) and Err(UnknownItem)
#[tokio::test]
async fn rejects_unknown_codes() {
    let catalog = catalog();
    let store = MemoryStore::new();
    started(&store, &catalog, fixture::STAGE_ONE).await;
    let repo = RunStateRepository::new(&store, RUN_TTL);

    assert!(matches!(
        repo.record_enemy_kill(1, fixture::GOLEM).await,
        Err(RunError::UnknownEnemy { .. })
    ));
    assert!(matches!(
        repo.record_item_obtain(1, fixture::SWORD, 1).await,
        Err(RunError::UnknownItem { .. })
    ));
}

/// Tests events without an active run.
///
/// Expected: Err(NoActiveRun)
#[tokio::test]
async fn requires_active_run() {
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);

    assert!(matches!(
        repo.record_enemy_kill(1, fixture::SLIME).await,
        Err(RunError::NoActiveRun)
    ));
    assert!(matches!(
        repo.record_item_obtain(1, fixture::POTION, 1).await,
        Err(RunError::NoActiveRun)
    ));
}

/// Tests a non-positive obtain count.
///
/// Expected: Err(InvalidCount)
#[tokio::test]
async fn rejects_non_positive_count() {
    let catalog = catalog();
    let store = MemoryStore::new();
    started(&store, &catalog, fixture::STAGE_ONE).await;
    let repo = RunStateRepository::new(&store, RUN_TTL);

    assert!(matches!(
        repo.record_item_obtain(1, fixture::POTION, 0).await,
        Err(RunError::InvalidCount(0))
    ));
}
