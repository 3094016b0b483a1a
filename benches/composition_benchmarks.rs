use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curator_core::composition::{add_shelf, published_shelves, reorder};
use curator_core::models::{Domain, PageConfig, ShelfConfig};
use curator_core::ordering::move_item;
use curator_core::validation::ShelfValidator;

fn shelves(count: usize) -> Vec<ShelfConfig> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let shelf = ShelfConfig::manual(format!("s{i}"), Domain::Content)
                .with_selected_items((0..20).map(|j| format!("v{i}-{j}")));
            if i % 3 == 0 {
                shelf.with_schedule(true, Some(now + Duration::days(1)))
            } else {
                shelf
            }
        })
        .collect()
}

fn page(shelves: &[ShelfConfig]) -> PageConfig {
    shelves.iter().fold(PageConfig::new("home", "Home"), |page, shelf| {
        add_shelf(page, shelf).into_value()
    })
}

fn benchmark_move_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_item");
    for size in [10usize, 100, 1000] {
        let items: Vec<String> = (0..size).map(|i| format!("v{i}")).collect();
        let last = format!("v{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| move_item(black_box(items.clone()), "v0", &last))
        });
    }
    group.finish();
}

fn benchmark_page_reorder(c: &mut Criterion) {
    let shelves = shelves(50);
    let page = page(&shelves);
    let first = page.shelves[0].id.clone();
    let last = page.shelves[49].id.clone();

    c.bench_function("page_reorder_50", |b| {
        b.iter(|| reorder(black_box(page.clone()), &first, &last))
    });
}

fn benchmark_published_shelves(c: &mut Criterion) {
    let shelves = shelves(50);
    let page = page(&shelves);
    let now = Utc::now();

    c.bench_function("published_shelves_50", |b| {
        b.iter(|| published_shelves(black_box(&page), &shelves, now).len())
    });
}

fn benchmark_validate(c: &mut Criterion) {
    let shelves = shelves(1);
    let validator = ShelfValidator::default();

    c.bench_function("validate_manual_shelf", |b| {
        b.iter(|| validator.validate(black_box(&shelves[0])))
    });
}

criterion_group!(
    benches,
    benchmark_move_item,
    benchmark_page_reorder,
    benchmark_published_shelves,
    benchmark_validate
);
criterion_main!(benches);
