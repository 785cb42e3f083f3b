//! Notification capability used by checkout.

use crate::checkout::order::Order;
use crate::pipeline::Reporter;

/// Tells the customer about their order.
pub trait Notifier: Send + Sync {
    fn notify(&self, order: &Order);
}

/// Sends a confirmation email.
#[derive(Debug)]
pub struct EmailNotifier {
    reporter: Reporter,
}

impl EmailNotifier {
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }
}

impl Notifier for EmailNotifier {
    fn notify(&self, order: &Order) {
        self.reporter.info(format!(
            "Notification: confirmation email sent to {} (order {}, status {})",
            order.customer_name,
            order.id,
            order.status.name()
        ));
    }
}
