//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Performance benchmarks for genome access and trait derivation
//!
//! Run with: cargo bench --bench trait_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use heritage_genome::{FiveFactor, GeneField, Genome, TraitMask, derive_traits};
use std::hint::black_box;

/// Deterministic spread of genomes so every rule gets exercised.
fn sample_genomes(count: u64) -> Vec<Genome> {
    (0..count)
        .map(|i| Genome::new(i.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
        .collect()
}

/// Benchmark reading and writing every field
fn bench_field_access(c: &mut Criterion) {
    let genome = Genome::new(0x53E5_3456_789A_BC00);

    c.bench_function("get_all_fields", |b| {
        b.iter(|| {
            GeneField::all()
                .iter()
                .map(|field| black_box(genome).get(*field))
                .sum::<u64>()
        })
    });

    c.bench_function("set_all_fields", |b| {
        b.iter(|| {
            GeneField::all()
                .iter()
                .fold(black_box(genome), |g, field| g.set(*field, black_box(0xFF)))
        })
    });
}

/// Benchmark trait derivation
fn bench_derive_traits(c: &mut Criterion) {
    c.bench_function("derive_traits_neutral", |b| {
        b.iter(|| derive_traits(black_box(&FiveFactor::neutral())))
    });

    let mut group = c.benchmark_group("derive_traits_batch");
    for size in [100u64, 1_000, 10_000].iter() {
        let genomes = sample_genomes(*size);
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &genomes, |b, genomes| {
            b.iter(|| genomes.iter().map(|g| g.traits().bits() as u64).sum::<u64>())
        });
    }
    group.finish();
}

/// Benchmark pairwise trait comparison
fn bench_compare(c: &mut Criterion) {
    let masks: Vec<TraitMask> = sample_genomes(256).iter().map(|g| g.traits()).collect();

    c.bench_function("compare_pairwise_256", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for a in &masks {
                for other in &masks {
                    total += a.compare(black_box(other));
                }
            }
            total
        })
    });
}

criterion_group!(benches, bench_field_access, bench_derive_traits, bench_compare);
criterion_main!(benches);
