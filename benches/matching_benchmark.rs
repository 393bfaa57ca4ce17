// ============================================================================
// Matching Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Crossing Sweep - Incoming order consuming several resting price levels
// 2. No Match - Pure insertion when nothing crosses
// 3. Engine Invocation - Full channel round-trip through process_one
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use matchbook::numeric::{Price, Quantity};
use matchbook::prelude::*;

fn order(side: Side, price: i64, quantity: i64, participant: &str, timestamp: i64) -> Order {
    Order::new(
        OrderType::Limit,
        side,
        Price::from_ticks(price).unwrap(),
        Quantity::from_units(quantity).unwrap(),
        participant,
        timestamp,
    )
}

// ============================================================================
// Crossing Sweep Benchmarks
// Buy order crossing the first 5 levels of a pre-populated ask side
// ============================================================================

fn benchmark_crossing_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossing_sweep");

    for num_orders in [100i64, 1_000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_orders),
            num_orders,
            |b, &num_orders| {
                let mut book = OrderBook::new();
                for i in 0..num_orders {
                    book.insert(order(Side::Sell, 50_000 + i, 1, "maker", i));
                }
                let incoming = order(Side::Buy, 50_004, 5, "taker", num_orders);

                b.iter_batched(
                    || book.clone(),
                    |mut book| black_box(match_order(&mut book, incoming.clone())),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// No Match Benchmarks
// Order that cannot cross anything and goes straight into its own side
// ============================================================================

fn benchmark_no_match_insert(c: &mut Criterion) {
    c.bench_function("no_match_insert", |b| {
        let mut book = OrderBook::new();
        for i in 0..1_000i64 {
            book.insert(order(Side::Sell, 60_000 + i, 1, "maker", i));
        }
        // Below every resting ask
        let incoming = order(Side::Buy, 50_000, 1, "taker", 1_000);

        b.iter_batched(
            || book.clone(),
            |mut book| black_box(match_order(&mut book, incoming.clone())),
            BatchSize::SmallInput,
        );
    });
}

// ============================================================================
// Engine Invocation Benchmarks
// Channel receive, match, and trade emission for one crossing pair
// ============================================================================

fn benchmark_engine_invocation(c: &mut Criterion) {
    c.bench_function("engine_invocation", |b| {
        b.iter_batched(
            || {
                let (engine, order_tx, trade_rx) =
                    MatchingEngineBuilder::new("BENCH").build().unwrap();
                order_tx.send(order(Side::Sell, 100, 1, "maker", 1)).unwrap();
                order_tx.send(order(Side::Buy, 100, 1, "taker", 2)).unwrap();
                (engine, order_tx, trade_rx)
            },
            |(mut engine, _order_tx, trade_rx)| {
                engine.process_one().unwrap();
                engine.process_one().unwrap();
                black_box(trade_rx.try_recv().unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    benchmark_crossing_sweep,
    benchmark_no_match_insert,
    benchmark_engine_invocation,
);
criterion_main!(benches);
