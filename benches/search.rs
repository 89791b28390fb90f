use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

use contact_book::prelude::{ContactStore, Draft, LocalStorage, MemoryKeyValue};

const FIRST_NAMES: [&str; 8] = [
    "Uche", "Alex", "Patricia", "Diane", "John", "Emily", "Michael", "Zoe",
];
const DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "example.com", "outlook.com"];

// Store backed by memory and filled through import, so setup skips
// per-record validation and measurements cover the store operations only.
fn make_store_with_n(n: usize) -> ContactStore {
    let mut rng = StdRng::seed_from_u64(7);
    let drafts: Vec<Draft> = (0..n)
        .map(|i| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
            Draft::new(
                &format!("{first} {i}"),
                &format!("080{:08}", rng.gen_range(0..100_000_000u32)),
            )
            .with_email(&format!("{}{i}@{domain}", first.to_lowercase()))
        })
        .collect();

    let document = serde_json::to_vec(&drafts).expect("drafts encode");
    let mut store = ContactStore::new(Box::new(LocalStorage::new(MemoryKeyValue::new())));
    store.import(&document).expect("import");
    store
}

fn bench_search(c: &mut Criterion) {
    let storage = make_store_with_n(5_000);

    c.bench_function("search 5k contacts by name", |b| {
        b.iter(|| black_box(storage.search(black_box("patricia"))))
    });

    c.bench_function("search 5k contacts by phone", |b| {
        b.iter(|| black_box(storage.search(black_box("0801234"))))
    });

    c.bench_function("search 5k contacts by email domain", |b| {
        b.iter(|| black_box(storage.search(black_box("@example.com"))))
    });
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("adding to 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut storage| {
                let added = storage.add(
                    Draft::new("Zoe", "08885499529").with_email("bryanwelch@gmail.com"),
                );
                black_box(added)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_export(c: &mut Criterion) {
    let storage = make_store_with_n(5_000);

    c.bench_function("exporting 5k contacts", |b| {
        b.iter(|| black_box(storage.export()))
    });
}

criterion_group!(benches, bench_search, bench_add, bench_export);
criterion_main!(benches);
