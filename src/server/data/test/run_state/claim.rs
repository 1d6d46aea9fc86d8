use super::*;

async fn cleared_run(repo: &RunStateRepository<'_>) {
    let catalog = catalog();
    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();
    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    repo.record_enemy_kill(1, fixture::SLIME).await.unwrap();
    repo.record_item_obtain(1, fixture::POTION, 2).await.unwrap();
}

/// Tests claiming a complete run.
///
/// Expected: obtained items returned, both keys removed, a second claim fails
#[tokio::test]
async fn removes_claimed_run() {
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    cleared_run(&repo).await;

    let claimed = repo.claim(1, fixture::STAGE_ONE).await.unwrap();

    assert_eq!(claimed.cleared.stage_code, fixture::STAGE_ONE);
    assert_eq!(claimed.cleared.items, vec![RewardItem::new(fixture::POTION, 2)]);
    assert!(store.get(&enemies_key(1)).await.unwrap().is_none());
    assert!(store.get(&items_key(1)).await.unwrap().is_none());
    assert!(matches!(
        repo.claim(1, fixture::STAGE_ONE).await,
        Err(RunError::NoActiveRun)
    ));
}

/// Tests claiming the run under another stage code.
///
/// Expected: Err(StageMismatch) and the run still clearable
#[tokio::test]
async fn keeps_run_on_stage_mismatch() {
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    cleared_run(&repo).await;

    assert!(matches!(
        repo.claim(1, fixture::STAGE_TWO).await,
        Err(RunError::StageMismatch {
            active: fixture::STAGE_ONE,
            requested: fixture::STAGE_TWO
        })
    ));
    assert!(repo.validate_clear(1).await.is_ok());
}

/// Tests claiming when the enemies key cannot be deleted.
///
/// Expected: Err(Store) and the run left intact
#[tokio::test]
async fn keeps_run_when_delete_fails() {
    let store = DeleteFailingStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    cleared_run(&repo).await;

    store.fail_deletes(true);
    assert!(matches!(
        repo.claim(1, fixture::STAGE_ONE).await,
        Err(RunError::Store(_))
    ));

    store.fail_deletes(false);
    assert!(repo.validate_clear(1).await.is_ok());
}

/// Tests a claim whose items key outlives the enemies key.
///
/// Expected: claim succeeds, the leftover items key cannot be validated again
#[tokio::test]
async fn leftover_items_key_is_not_clearable() {
    let store = DeleteFailingStore::only_keys_ending_with(":items");
    let repo = RunStateRepository::new(&store, RUN_TTL);
    cleared_run(&repo).await;

    store.fail_deletes(true);
    repo.claim(1, fixture::STAGE_ONE).await.unwrap();

    assert!(store.get(&items_key(1)).await.unwrap().is_some());
    assert!(matches!(
        repo.validate_clear(1).await,
        Err(RunError::NoActiveRun)
    ));
}

/// Tests writing a claimed run back.
///
/// Expected: progress restored with its counts, clearable again
#[tokio::test]
async fn restores_claimed_run() {
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    cleared_run(&repo).await;

    let claimed = repo.claim(1, fixture::STAGE_ONE).await.unwrap();
    repo.restore(1, &claimed).await.unwrap();

    assert!(matches!(
        repo.record_enemy_kill(1, fixture::SLIME).await,
        Err(RunError::CeilingExceeded { .. })
    ));
    let cleared = repo.validate_clear(1).await.unwrap();
    assert_eq!(cleared, claimed.cleared);
}
