use super::*;

/// Tests ending an active run.
///
/// Expected: both keys removed
#[tokio::test]
async fn removes_run() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);
    repo.start(1, catalog.stage(fixture::STAGE_ONE).unwrap())
        .await
        .unwrap();

    repo.end(1).await.unwrap();

    assert!(store.get(&enemies_key(1)).await.unwrap().is_none());
    assert!(store.get(&items_key(1)).await.unwrap().is_none());
}

/// Tests ending when no run exists.
///
/// Expected: Ok, twice in a row
#[tokio::test]
async fn is_idempotent() {
    let store = MemoryStore::new();
    let repo = RunStateRepository::new(&store, RUN_TTL);

    assert!(repo.end(1).await.is_ok());
    assert!(repo.end(1).await.is_ok());
}
