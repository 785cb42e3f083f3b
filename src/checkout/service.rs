//! Checkout coordinator.

use crate::checkout::notify::Notifier;
use crate::checkout::order::{Order, OrderStatus};
use crate::checkout::payment::PaymentProcessor;
use crate::pipeline::{EventSink, Reporter};
use std::sync::Arc;

/// Source named in checkout events
pub const CHECKOUT_SOURCE: &str = "CheckoutSystem";

/// Coordinates payment and notification for an order.
///
/// Both capabilities are injected; the service only sequences them.
pub struct CheckoutService {
    payment: Box<dyn PaymentProcessor>,
    notifier: Box<dyn Notifier>,
    reporter: Reporter,
}

impl CheckoutService {
    pub fn new(
        payment: Box<dyn PaymentProcessor>,
        notifier: Box<dyn Notifier>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            payment,
            notifier,
            reporter: Reporter::new(CHECKOUT_SOURCE, sink),
        }
    }

    /// Charge the order and, on success, mark it paid and notify the customer.
    ///
    /// A failed charge leaves the order status untouched and sends nothing.
    pub fn process_checkout(&self, order: &mut Order) -> bool {
        self.reporter.info(format!(
            "Starting checkout for {}. Total: {:.2}",
            order.customer_name, order.total_price
        ));

        if !self.payment.charge(order) {
            self.reporter
                .error(format!("Payment failed for order {}. Checkout cancelled.", order.id));
            return false;
        }

        order.status = OrderStatus::Paid;
        self.notifier.notify(order);
        self.reporter
            .info(format!("Checkout succeeded. Order {} is PAID.", order.id));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{CreditCardProcessor, EmailNotifier};
    use crate::pipeline::{MemorySink, Severity};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Declined;

    impl PaymentProcessor for Declined {
        fn charge(&self, _order: &Order) -> bool {
            false
        }
    }

    struct CountingNotifier {
        sent: Arc<AtomicUsize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _order: &Order) {
            self.sent.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn successful_checkout_marks_paid_and_notifies() {
        let sink = Arc::new(MemorySink::new());
        let reporter = Reporter::new(CHECKOUT_SOURCE, sink.clone());
        let service = CheckoutService::new(
            Box::new(CreditCardProcessor::new(reporter.clone())),
            Box::new(EmailNotifier::new(reporter)),
            sink.clone(),
        );
        let mut order = Order::new("Andi", 500_000.0);

        assert!(service.process_checkout(&mut order));
        assert!(order.is_paid());
        // start, charge, email, success
        assert_eq!(sink.severities(), vec![Severity::Info; 4]);
    }

    #[test]
    fn declined_payment_stops_checkout() {
        let sink = Arc::new(MemorySink::new());
        let sent = Arc::new(AtomicUsize::new(0));
        let service = CheckoutService::new(
            Box::new(Declined),
            Box::new(CountingNotifier { sent: sent.clone() }),
            sink.clone(),
        );
        let mut order = Order::new("Andi", 500_000.0);

        assert!(!service.process_checkout(&mut order));
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(sent.load(Ordering::SeqCst), 0);
        assert_eq!(sink.severities(), vec![Severity::Info, Severity::Error]);
    }

    #[test]
    fn notifier_sees_paid_status() {
        struct StatusProbe {
            paid: Arc<AtomicUsize>,
        }

        impl Notifier for StatusProbe {
            fn notify(&self, order: &Order) {
                if order.is_paid() {
                    self.paid.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let paid = Arc::new(AtomicUsize::new(0));
        let sink = Arc::new(MemorySink::new());
        let service = CheckoutService::new(
            Box::new(CreditCardProcessor::new(Reporter::new("x", sink.clone()))),
            Box::new(StatusProbe { paid: paid.clone() }),
            sink,
        );

        service.process_checkout(&mut Order::new("Budi", 1.0));
        assert_eq!(paid.load(Ordering::SeqCst), 1);
    }
}
