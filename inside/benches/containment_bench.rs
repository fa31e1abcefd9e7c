use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inside::path::{normalize, relative, EvictionPolicy, LexicalResolver, PathResolver, ResolveCache};
use inside::ContainmentChecker;
use std::path::Path;

const SCENARIOS: [(&str, &str, &str); 7] = [
    ("relative", "a/b/c", "a"),
    ("absolute", "/a/b/c", "/a"),
    ("same_path", "/a/b", "/a/b"),
    ("outside_parent", "/x/y", "/a/b"),
    ("cached_repeated", "some/nested/path/file.txt", "some/nested"),
    ("mixed", "./a/b/c", "/tmp"),
    ("complex_relative", "a/../b/c", "."),
];

fn checker() -> ContainmentChecker {
    ContainmentChecker::with_base("/home/user").expect("absolute base")
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for (name, path) in [
        ("clean", "/absolute/path/to/file"),
        ("with_dots", "/a/b/../c/./d"),
        ("many_dots", "/a/b/c/d/../../e/f"),
        ("above_root", "/../../etc"),
        ("trailing", "/a/b/c/"),
    ] {
        group.bench_with_input(BenchmarkId::new("collapse", name), &path, |b, &p| {
            b.iter(|| normalize::collapse(black_box(Path::new(p))));
        });
    }

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");
    let resolver = LexicalResolver::new("/home/user").expect("absolute base");

    for (name, path) in [
        ("simple", "a/b/c"),
        ("dot", "."),
        ("traversal", "a/../b/c"),
        ("deep", "one/two/three/four/five/six/seven"),
    ] {
        group.bench_with_input(BenchmarkId::new("resolve", name), &path, |b, &p| {
            b.iter(|| resolver.resolve(black_box(Path::new(p))));
        });
    }

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");

    let parent = Path::new("/users/test/projects/inside");
    let child = Path::new("/users/test/projects/inside/src/path");
    let sibling = Path::new("/users/test/projects/other");

    group.bench_function("descendant", |b| {
        b.iter(|| relative::relative(black_box(parent), black_box(child)));
    });

    group.bench_function("sibling", |b| {
        b.iter(|| relative::relative(black_box(parent), black_box(sibling)));
    });

    group.finish();
}

fn bench_is_inside(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_inside");

    for (name, child, parent) in SCENARIOS {
        let mut checker = checker();
        group.bench_function(name, |b| {
            b.iter(|| checker.is_inside(black_box(child), black_box(parent)));
        });
    }

    group.finish();
}

fn bench_cache_at_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_at_capacity");
    let inputs: Vec<String> = (0..2_000).map(|i| format!("dir{i}/file")).collect();

    for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
        group.bench_function(BenchmarkId::new("churn", policy), |b| {
            let cache = ResolveCache::with_policy(1_000, policy).expect("nonzero capacity");
            let mut checker =
                ContainmentChecker::new(LexicalResolver::new("/w").expect("absolute base"), cache);
            let mut i = 0;
            b.iter(|| {
                let child = &inputs[i % inputs.len()];
                i += 1;
                checker.is_inside(black_box(child.as_str()), black_box("/w"))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_resolver,
    bench_relative,
    bench_is_inside,
    bench_cache_at_capacity
);
criterion_main!(benches);
