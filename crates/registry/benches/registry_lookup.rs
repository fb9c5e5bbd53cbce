use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use serde::{Deserialize, Serialize};
use serde_json::json;

use staticentity_core::{CatalogResult, DataSet, StaticEntity, ValueObject};
use staticentity_registry::ManagerRegistry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Country {
    id: u32,
    name: String,
}

impl ValueObject for Country {}

impl StaticEntity for Country {
    type Id = u32;

    fn data_set() -> CatalogResult<DataSet<u32>> {
        Ok((0..250).fold(DataSet::new(), |set, id| {
            set.entry(id, json!({ "name": format!("Country {id}") }))
        }))
    }

    fn id(&self) -> &u32 {
        &self.id
    }
}

fn bench_manager_resolution(c: &mut Criterion) {
    let registry = ManagerRegistry::new();
    registry.manager::<Country>().unwrap();

    c.bench_function("resolve_cached_manager", |b| {
        b.iter(|| black_box(registry.manager::<Country>().unwrap()))
    });

    c.bench_function("build_manager_from_data_set", |b| {
        b.iter(|| black_box(ManagerRegistry::new().manager::<Country>().unwrap()))
    });
}

fn bench_lookups(c: &mut Criterion) {
    let registry = ManagerRegistry::new();
    let manager = registry.manager::<Country>().unwrap();

    let mut group = c.benchmark_group("lookups");
    for id in [0u32, 125, 249] {
        group.bench_with_input(BenchmarkId::new("get", id), &id, |b, id| {
            b.iter(|| black_box(manager.get(id).unwrap()))
        });
    }
    group.bench_function("get_associative_name", |b| {
        b.iter(|| black_box(manager.get_associative("name").unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_manager_resolution, bench_lookups);
criterion_main!(benches);
