//! Campaign benchmark over the reference netlist.
#![allow(unused_crate_dependencies)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saft_net::example_circuits::build_reconvergent_circuit;
use saft_sim::{full_sweep, run_full_campaign};

fn bench_full_sweep(c: &mut Criterion) {
    c.bench_function("full_sweep_reconvergent", |b| {
        let mut circuit = build_reconvergent_circuit();
        b.iter(|| {
            let signature = full_sweep(black_box(&mut circuit));
            black_box(signature);
        });
    });
}

fn bench_full_campaign(c: &mut Criterion) {
    c.bench_function("full_campaign_reconvergent", |b| {
        let mut circuit = build_reconvergent_circuit();
        b.iter(|| {
            let records = run_full_campaign(black_box(&mut circuit));
            black_box(records);
        });
    });
}

criterion_group!(benches, bench_full_sweep, bench_full_campaign);
criterion_main!(benches);
