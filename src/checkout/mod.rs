//! Order checkout with injected payment and notification capabilities.
//!
//! # Example
//!
//! ```rust
//! use rulegate::checkout::{CheckoutService, CreditCardProcessor, EmailNotifier, Order, CHECKOUT_SOURCE};
//! use rulegate::pipeline::{MemorySink, Reporter};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let reporter = Reporter::new(CHECKOUT_SOURCE, sink.clone());
//! let service = CheckoutService::new(
//!     Box::new(CreditCardProcessor::new(reporter.clone())),
//!     Box::new(EmailNotifier::new(reporter)),
//!     sink,
//! );
//!
//! let mut order = Order::new("Andi", 500_000.0);
//! assert!(service.process_checkout(&mut order));
//! assert!(order.is_paid());
//! ```

pub mod notify;
pub mod order;
pub mod payment;
pub mod service;

pub use notify::{EmailNotifier, Notifier};
pub use order::{Order, OrderStatus};
pub use payment::{CreditCardProcessor, PaymentProcessor};
pub use service::{CheckoutService, CHECKOUT_SOURCE};
