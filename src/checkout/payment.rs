//! Payment capability used by checkout.

use crate::checkout::order::Order;
use crate::pipeline::Reporter;

/// Charges an order.
pub trait PaymentProcessor: Send + Sync {
    /// Returns `true` when the charge went through.
    fn charge(&self, order: &Order) -> bool;
}

/// Credit card payment; every charge succeeds.
#[derive(Debug)]
pub struct CreditCardProcessor {
    reporter: Reporter,
}

impl CreditCardProcessor {
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn charge(&self, order: &Order) -> bool {
        self.reporter.info(format!(
            "Payment: charging {:.2} to credit card for order {}",
            order.total_price, order.id
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{MemorySink, Severity};
    use std::sync::Arc;

    #[test]
    fn credit_card_charge_succeeds_and_reports() {
        let sink = Arc::new(MemorySink::new());
        let processor = CreditCardProcessor::new(Reporter::new("CheckoutSystem", sink.clone()));
        let order = Order::new("Andi", 500_000.0);

        assert!(processor.charge(&order));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Info);
        assert!(events[0].message.contains("500000.00"));
    }

    #[test]
    fn charge_leaves_order_untouched() {
        let processor = CreditCardProcessor::new(Reporter::new("src", Arc::new(MemorySink::new())));
        let order = Order::new("Andi", 1.0);
        let before = order.clone();

        processor.charge(&order);
        assert_eq!(order, before);
    }
}
