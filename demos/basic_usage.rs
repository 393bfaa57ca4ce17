// ============================================================================
// Basic Usage Example
// ============================================================================

use matchbook::numeric::{Price, Quantity};
use matchbook::prelude::*;
use std::thread;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Matchbook Example ===\n");

    let (mut engine, order_tx, trade_rx) = MatchingEngineBuilder::new("BTC-USD")
        .build()
        .unwrap();

    // Dedicated worker draining the order channel
    let worker = thread::spawn(move || {
        let result = engine.run();
        (engine, result)
    });

    println!("Submitting orders...");
    let orders = [
        (Side::Buy, 100, 1, "alice"),
        (Side::Buy, 99, 1, "alice"),
        (Side::Sell, 101, 1, "carol"),
        (Side::Sell, 102, 1, "carol"),
        (Side::Sell, 98, 4, "carol"),
        (Side::Buy, 102, 4, "dave"),
    ];
    for (timestamp, (side, price, quantity, participant)) in orders.into_iter().enumerate() {
        println!("  {:?} {} @ {} ({})", side, quantity, price, participant);
        order_tx
            .send(Order::new(
                OrderType::Limit,
                side,
                Price::from_ticks(price).unwrap(),
                Quantity::from_units(quantity).unwrap(),
                participant,
                timestamp as i64,
            ))
            .unwrap();
    }

    // Dropping the last sender shuts the worker down cleanly
    drop(order_tx);
    let (engine, result) = worker.join().unwrap();
    result.unwrap();

    println!("\n=== Trades ===");
    for trade in trade_rx.try_iter() {
        println!(
            "  {} @ {}  ({} -> {})",
            trade.quantity, trade.price, trade.sell_participant, trade.buy_participant
        );
    }

    println!("\n=== Final Order Book ===");
    match engine.best_bid() {
        Some(bid) => println!("Best bid: {} @ {}", bid.quantity, bid.price),
        None => println!("Best bid: none"),
    }
    match engine.best_ask() {
        Some(ask) => println!("Best ask: {} @ {}", ask.quantity, ask.price),
        None => println!("Best ask: none"),
    }
    println!(
        "Depth: {} bid(s), {} ask(s)",
        engine.book().bid_depth(),
        engine.book().ask_depth()
    );
}
