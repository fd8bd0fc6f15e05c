use criterion::{Criterion, criterion_group, criterion_main};


fn run_benchmarks(c: &mut Criterion) {
    sorted_bench::register_benchmarks(c);
    queue_bench::register_benchmarks(c);
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
