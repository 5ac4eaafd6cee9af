// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tally::{do_while_loop, for_loop};
use tally_core::{
    predicate::HasHighNibbleBits,
    scan::{Traversal, count_with},
};

const SIZES: [usize; 3] = [64, 8_192, 131_072];

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

fn random_doubles(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| f64::from(rng.random_range(-1_000_i32..1_000)) / 2.0)
        .collect()
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal_benchmark");

    for len in SIZES {
        let values = random_bytes(len, 42);
        group.throughput(Throughput::Elements(len as u64));

        for traversal in Traversal::ALL {
            group.bench_with_input(
                BenchmarkId::new(traversal.name(), len),
                &values,
                |b, values| {
                    b.iter(|| {
                        count_with(
                            traversal,
                            Some(black_box(values.as_slice())),
                            "values",
                            &HasHighNibbleBits,
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_loop_against_twin(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_vs_recursive");

    for len in SIZES {
        let bytes = random_bytes(len, 7);
        let doubles = random_doubles(len, 7);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("high_nibble_for", len), &bytes, |b, v| {
            b.iter(|| {
                let values = black_box(v.as_slice());
                for_loop::byte_with_bits_in_high_nibble_count(Some(values))
            })
        });
        group.bench_with_input(
            BenchmarkId::new("high_nibble_recursive", len),
            &bytes,
            |b, v| {
                b.iter(|| {
                    let values = black_box(v.as_slice());
                    for_loop::byte_with_bits_in_high_nibble_count_recursive(Some(values))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("rounded_to_even_do_while", len),
            &doubles,
            |b, v| {
                b.iter(|| do_while_loop::rounded_to_even_count(Some(black_box(v.as_slice()))))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("rounded_to_even_recursive", len),
            &doubles,
            |b, v| {
                b.iter(|| {
                    let values = black_box(v.as_slice());
                    do_while_loop::rounded_to_even_count_recursive(Some(values))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_traversals, bench_loop_against_twin);
criterion_main!(benches);
