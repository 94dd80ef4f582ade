use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genofreq_sim::genotype::MatingSelection::{DomDom, DomRec, HetDom, HetHet, RecRec};
use genofreq_sim::prelude::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

fn random_selections(rng: &mut Xoshiro256PlusPlus) -> [MatingSelection; 3] {
    let mut selections = [DomDom; 3];
    for slot in &mut selections {
        let idx = rng.random_range(0..6u8);
        *slot = MatingSelection::from_index(idx).expect("index in range");
    }
    selections
}

fn bench_matrix_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let triples: Vec<[MatingSelection; 3]> =
        (0..64).map(|_| random_selections(&mut rng)).collect();

    group.bench_function("from_selections_x64", |b| {
        b.iter(|| {
            for selections in &triples {
                black_box(TransitionMatrix::from_selections(black_box(*selections)));
            }
        })
    });

    group.finish();
}

fn bench_eigendecomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigen");

    // Distinct eigenvalues, repeated eigenvalues and a rank-1 matrix hit
    // different branches of the eigenvector extraction.
    let cases = [
        ("distinct", [DomRec, HetHet, HetDom]),
        ("repeated", [DomDom, HetHet, RecRec]),
        ("rank_one", [HetHet, HetHet, HetHet]),
    ];

    for (name, selections) in cases {
        let matrix = TransitionMatrix::from_selections(selections);
        group.bench_function(name, |b| {
            b.iter(|| Eigendecomposition::of(black_box(&matrix)))
        });
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let matrix = TransitionMatrix::from_selections([DomRec, HetHet, HetDom]);
    let initial = FrequencyVector::new(0.2, 0.5, 0.3);

    for generations in [10, 50, 200] {
        group.bench_with_input(
            BenchmarkId::new("diagonalization", generations),
            &generations,
            |b, &g| {
                b.iter(|| {
                    project_trajectory_with(
                        black_box(&matrix),
                        black_box(&initial),
                        g,
                        ProjectionStrategy::Diagonalization,
                    )
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("repeated_multiplication", generations),
            &generations,
            |b, &g| {
                b.iter(|| {
                    project_trajectory_with(
                        black_box(&matrix),
                        black_box(&initial),
                        g,
                        ProjectionStrategy::RepeatedMultiplication,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_matrix_assembly,
    bench_eigendecomposition,
    bench_projection
);
criterion_main!(benches);
