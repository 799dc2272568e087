//! Alert module - threshold evaluation and email notification

pub mod evaluator;
pub mod notifier;

pub use evaluator::evaluate;
pub use notifier::{validate_mail_config, EmailNotifier, MissingField};
