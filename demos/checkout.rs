//! Order Checkout
//!
//! This demo charges an order and notifies the customer.
//!
//! Key concepts:
//! - Payment and notification capabilities injected into the coordinator
//! - Status only changes after a successful charge
//!
//! Run with: cargo run --example checkout

use rulegate::checkout::{
    CheckoutService, CreditCardProcessor, EmailNotifier, Order, CHECKOUT_SOURCE,
};
use rulegate::logging;
use rulegate::pipeline::{Reporter, TracingSink};
use std::sync::Arc;

fn main() {
    logging::init();
    let sink = Arc::new(TracingSink);
    let reporter = Reporter::new(CHECKOUT_SOURCE, sink.clone());

    let service = CheckoutService::new(
        Box::new(CreditCardProcessor::new(reporter.clone())),
        Box::new(EmailNotifier::new(reporter)),
        sink,
    );

    let mut order = Order::new("Andi", 500_000.0);
    let paid = service.process_checkout(&mut order);
    println!(
        "order {} for {}: success = {}, status = {}",
        order.id,
        order.customer_name,
        paid,
        order.status.name()
    );
}
