use guide_core::{
    Coordinate, GuideConfig, KeyValueStore, LoadOutcome, NewPlace, PlaceStore, SqliteKvStore,
};

#[tokio::test]
async fn set_get_remove_roundtrip() {
    let kv = SqliteKvStore::open_in_memory().unwrap();

    assert_eq!(kv.get("missing").await.unwrap(), None);

    kv.set("k", b"first".to_vec()).await.unwrap();
    kv.set("k", b"second".to_vec()).await.unwrap();
    assert_eq!(kv.get("k").await.unwrap(), Some(b"second".to_vec()));

    kv.remove("k").await.unwrap();
    assert_eq!(kv.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn store_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.sqlite3");
    let config = GuideConfig::default();

    let created = {
        let mut store = PlaceStore::new(SqliteKvStore::open(&path).unwrap(), &config);
        assert_eq!(store.load().await, LoadOutcome::Seeded);
        store
            .add(NewPlace::new("Park", Coordinate::new(61.80, 34.38)))
            .await
            .unwrap()
    };

    let mut reopened = PlaceStore::new(SqliteKvStore::open(&path).unwrap(), &config);
    assert_eq!(reopened.load().await, LoadOutcome::Restored { count: 3 });
    assert_eq!(reopened.get(&created.id), Some(created));
}
