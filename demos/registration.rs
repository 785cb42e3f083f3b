//! Student Registration
//!
//! This demo runs students through the standard registration rules.
//!
//! Key concepts:
//! - Rules injected as an ordered list
//! - First failing rule rejects the registration
//! - Events routed to `tracing` through an injected sink
//!
//! Run with: cargo run --example registration

use rulegate::config::RegistrationConfig;
use rulegate::logging;
use rulegate::pipeline::TracingSink;
use rulegate::registration::{RegistrationService, Student};
use std::sync::Arc;

fn main() {
    logging::init();
    let sink = Arc::new(TracingSink);

    let service = RegistrationService::with_standard_rules(sink.clone());

    // Scenario 1: eligible student
    let budi = Student::new("Budi", 20, true);
    let outcome = service.register(&budi);
    println!("{}: accepted = {}", budi.name, outcome.is_accepted());

    // Scenario 2: too many credits
    let siti = Student::new("Siti", 25, true);
    let outcome = service.register(&siti);
    println!(
        "{}: accepted = {} ({})",
        siti.name,
        outcome.is_accepted(),
        outcome.reason().unwrap_or_default()
    );

    // Scenario 3: prerequisites missing, rules loaded from configuration
    let config = r#"{
        "rules": [
            { "kind": "credit_limit", "limit": 24 },
            { "kind": "prerequisites" },
            { "kind": "schedule_conflict" }
        ]
    }"#;
    let service = match RegistrationConfig::from_json(config).and_then(|c| c.into_service(sink)) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let andi = Student::new("Andi", 20, false);
    let outcome = service.register(&andi);
    println!(
        "{}: accepted = {} ({})",
        andi.name,
        outcome.is_accepted(),
        outcome.reason().unwrap_or_default()
    );
}
