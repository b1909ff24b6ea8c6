// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Gaps, Measurements, place};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_measurements(count: usize, seed: u64) -> Vec<Measurements> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let cw = 200.0 + rng.next_f64() * 1800.0;
        let ch = 200.0 + rng.next_f64() * 1200.0;
        let x0 = rng.next_f64() * (cw - 40.0);
        let y0 = rng.next_f64() * (ch - 40.0);
        out.push(Measurements {
            container: Rect::new(0.0, 0.0, cw, ch),
            trigger: Rect::new(x0, y0, x0 + 40.0, y0 + 40.0),
            overlay: Size::new(
                50.0 + rng.next_f64() * 500.0,
                50.0 + rng.next_f64() * 500.0,
            ),
        });
    }
    out
}

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    for &n in &[1_000usize, 10_000] {
        let inputs = gen_measurements(n, 0x5eed_u64 + n as u64);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| {
                for m in &inputs {
                    black_box(place(black_box(m), Gaps::DEFAULT));
                }
            });
        });
    }
    group.finish();
}

fn bench_place_and_resolve(c: &mut Criterion) {
    let inputs = gen_measurements(1_000, 42);
    c.bench_function("place_and_resolve_n1000", |b| {
        b.iter(|| {
            for m in &inputs {
                let p = place(m, Gaps::DEFAULT);
                let (_, trigger) = m.to_container_space();
                black_box(p.overlay_rect(trigger, m.overlay, Gaps::DEFAULT));
            }
        });
    });
}

criterion_group!(benches, bench_place, bench_place_and_resolve);
criterion_main!(benches);
