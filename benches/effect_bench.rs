//! Benchmarks for the effect types: State, Reader, Writer, IO, Future and Continuation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kleisli::control::Outcome;
use kleisli::effect::{Context, Continuation, Future, IO, Reader, State, Writer};
use std::hint::black_box;

// =============================================================================
// Pure effects
// =============================================================================

fn benchmark_state_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_chain");

    for depth in [10, 100, 1000] {
        let counter = (0..depth).fold(State::<u64, ()>::pure(()), |program, _| {
            program.then(State::modify(|count: u64| count + 1))
        });
        group.bench_with_input(BenchmarkId::new("modify", depth), &counter, |bencher, counter| {
            bencher.iter(|| black_box(counter.exec(0)));
        });
    }

    group.finish();
}

fn benchmark_reader_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader_chain");

    let lookup = Reader::asks(|limits: (u32, u32)| limits.0).flat_map(|low| {
        Reader::asks(move |limits: (u32, u32)| limits.1.saturating_sub(low))
    });
    group.bench_function("asks_flat_map", |bencher| {
        bencher.iter(|| black_box(lookup.run((10, 250))));
    });

    group.finish();
}

fn benchmark_writer_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer_chain");

    group.bench_function("flat_map_100", |bencher| {
        bencher.iter(|| {
            let mut writer = Writer::new(0_u32, 0_u32);
            for _ in 0..100 {
                writer = writer.flat_map(|value| Writer::new(value + 1, value));
            }
            black_box(writer.run())
        });
    });

    group.finish();
}

fn benchmark_io_perform(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_perform");

    for depth in [10, 100] {
        let io = (0..depth).fold(IO::<u64, String>::pure(0), |io, _| {
            io.flat_map(|value| IO::new(move || Outcome::succeed(value + 1)))
        });
        group.bench_with_input(BenchmarkId::new("flat_map", depth), &io, |bencher, io| {
            bencher.iter(|| black_box(io.perform()));
        });
    }

    group.finish();
}

// =============================================================================
// Threaded effects
// =============================================================================

fn benchmark_future(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("future");

    group.bench_function("new_and_wait", |bencher| {
        bencher.iter(|| {
            let future = Future::<u64, String>::new(|| Outcome::succeed(42));
            black_box(future.wait())
        });
    });

    group.bench_function("completed_wait", |bencher| {
        let future = Future::<u64, String>::pure(42);
        bencher.iter(|| black_box(future.wait()));
    });

    group.finish();
}

fn benchmark_continuation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("continuation");
    let context = Context::background();

    group.bench_function("single_run", |bencher| {
        let continuation = Continuation::<u64>::pure(7);
        bencher.iter(|| black_box(continuation.run(&context)));
    });

    group.bench_function("three_stages", |bencher| {
        let pipeline = Continuation::<u64>::pure(7)
            .map(|value| value * 2)
            .flat_map(|value| Continuation::pure(value + 1));
        bencher.iter(|| black_box(pipeline.run(&context)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_state_chain,
    benchmark_reader_chain,
    benchmark_writer_chain,
    benchmark_io_perform,
    benchmark_future,
    benchmark_continuation
);

criterion_main!(benches);
