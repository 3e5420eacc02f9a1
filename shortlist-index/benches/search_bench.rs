//! Search throughput over a catalog-scale flat index.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use shortlist_core::models::{Assessment, Category};
use shortlist_index::VectorStore;

const DIMENSION: usize = 384;

/// Deterministic pseudo-random vectors, no RNG dependency needed.
struct Lcg(u64);

impl Lcg {
    fn next_f32(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f32 / (1u64 << 31) as f32) - 0.5
    }

    fn vector(&mut self, dimension: usize) -> Vec<f32> {
        (0..dimension).map(|_| self.next_f32()).collect()
    }
}

fn assessment(idx: usize) -> Assessment {
    Assessment {
        url: format!("https://example.com/a{idx}"),
        name: format!("Assessment {idx}"),
        description: None,
        category: Category::Unknown,
        duration: None,
        remote_support: None,
        adaptive_support: None,
        keywords: vec![],
    }
}

fn built_store(n: usize) -> VectorStore {
    let mut rng = Lcg(42);
    let store = VectorStore::new(DIMENSION);
    let assessments = (0..n).map(assessment).collect();
    let embeddings = (0..n).map(|_| rng.vector(DIMENSION)).collect();
    store.build(assessments, embeddings).expect("bench build");
    store
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_search");
    for &n in &[500usize, 2_000, 5_000] {
        let store = built_store(n);
        let query = Lcg(7).vector(DIMENSION);
        group.bench_with_input(BenchmarkId::new("top_50", n), &n, |b, _| {
            b.iter(|| store.search(&query, 50).expect("bench search"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
