use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nrx_core::Expr;
use nrx_psi4::{assemble, riemann, AdmInputs, NullTetrad, Psi4Config};

fn assemble_bench(c: &mut Criterion) {
    let config = Psi4Config::default();
    let inputs = AdmInputs::declared(&config).unwrap();
    let tetrad = NullTetrad::declared(&config.tetrad);
    c.bench_function("riemann_declared", |b| {
        b.iter(|| {
            let tensor = riemann(&inputs);
            black_box(tensor);
        });
    });
    c.bench_function("psi4_declared", |b| {
        b.iter(|| {
            let psi4 = assemble(&inputs, &tetrad).unwrap();
            black_box(psi4);
        });
    });
    let flat = AdmInputs::<Expr>::flat();
    c.bench_function("psi4_flat", |b| {
        b.iter(|| {
            let psi4 = assemble(&flat, &tetrad).unwrap();
            black_box(psi4);
        });
    });
}

criterion_group!(benches, assemble_bench);
criterion_main!(benches);
