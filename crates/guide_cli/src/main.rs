//! CLI smoke entry point.
//!
//! Seeds an in-memory store, adds one place, and prints the search
//! partition so core wiring can be checked without the mobile runtime.

use guide_core::{Coordinate, GuideConfig, MemoryKvStore, NewPlace, PlaceStore};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("guide_core ping={}", guide_core::ping());
    println!("guide_core version={}", guide_core::core_version());

    let config = GuideConfig::default();
    let mut store = PlaceStore::new(MemoryKvStore::new(), &config);
    let outcome = store.load().await;
    println!("load outcome={outcome:?} count={}", store.len());

    match store
        .add(NewPlace::new("Park", Coordinate::new(61.80, 34.38)))
        .await
    {
        Ok(place) => println!("added id={} count={}", place.id, store.len()),
        Err(err) => println!("add failed: {err}"),
    }

    let partition = store.search("park");
    println!(
        "search query=park recommended={} user={}",
        partition.recommended.len(),
        partition.user.len()
    );
}
