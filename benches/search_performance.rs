use codescribe::{Manager, Store};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

/// Populate a file-backed store with `count` snippets spread over a few tags.
fn populated(count: usize) -> (TempDir, Manager) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("snippets.db");
    let manager = Manager::new(Store::open(&path).expect("open store"));

    let tags = ["math", "io,files", "http,json", "sql", "strings,parsing"];
    for i in 0..count {
        manager
            .create_snippet(
                &format!("snippet {i}"),
                &format!("helper number {i}"),
                tags[i % tags.len()],
                "fn helper() -> usize {\n    42\n}\n",
                Some("Rust"),
            )
            .expect("insert");
    }

    (dir, manager)
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for count in [100, 1_000, 10_000] {
        let (_dir, manager) = populated(count);

        group.bench_with_input(BenchmarkId::new("keyword", count), &count, |b, _| {
            b.iter(|| manager.search_snippets(black_box("json")).expect("search"))
        });

        group.bench_with_input(BenchmarkId::new("get_all", count), &count, |b, _| {
            b.iter(|| manager.get_all_snippets().expect("get_all"))
        });
    }

    group.finish();
}

fn bench_get_by_id(c: &mut Criterion) {
    let (_dir, manager) = populated(1_000);

    c.bench_function("get_by_id", |b| {
        b.iter(|| manager.get_snippet_by_id(black_box(500)).expect("get"))
    });
}

criterion_group!(benches, bench_search, bench_get_by_id);
criterion_main!(benches);
