//! Concurrent first access to a catalog builds exactly one manager.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use staticentity_core::{CatalogResult, DataSet, StaticEntity, ValueObject};
use staticentity_registry::ManagerRegistry;

static WAREHOUSE_LOADS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Warehouse {
    id: String,
    city: String,
}

impl ValueObject for Warehouse {}

impl StaticEntity for Warehouse {
    type Id = String;

    fn data_set() -> CatalogResult<DataSet<String>> {
        WAREHOUSE_LOADS.fetch_add(1, Ordering::SeqCst);
        // Widen the window in which racing threads could double-build.
        thread::sleep(Duration::from_millis(20));

        Ok(DataSet::new()
            .entry("ams".to_string(), json!({ "city": "Amsterdam" }))
            .entry("lis".to_string(), json!({ "city": "Lisbon" })))
    }

    fn id(&self) -> &String {
        &self.id
    }
}

#[test]
fn racing_threads_share_one_manager() {
    const THREADS: usize = 16;

    let registry = Arc::new(ManagerRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.manager::<Warehouse>().unwrap()
            })
        })
        .collect();

    let managers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(WAREHOUSE_LOADS.load(Ordering::SeqCst), 1);
    for manager in &managers[1..] {
        assert!(Arc::ptr_eq(&managers[0], manager));
    }
    assert_eq!(
        managers[0].get_associative("city").unwrap()["lis"],
        json!("Lisbon")
    );
}
