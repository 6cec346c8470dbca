// src/notify.rs
use crate::models::AlertPayload;

/// Outbound notification seam. A real email transport can be substituted
/// behind this trait; the default implementation only logs the payload.
pub trait Notifier: Send + Sync {
    /// Returns whether the notification was accepted for delivery.
    fn send(&self, payload: &AlertPayload) -> bool;
}

/// Simulated delivery: log the would-be email and report success.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, payload: &AlertPayload) -> bool {
        tracing::info!(
            "Simulated email payload: {}",
            serde_json::to_string(payload).unwrap_or_default()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_notifier_reports_success() {
        let payload = AlertPayload {
            to: "ravi@example.com".to_string(),
            parent_name: "Ravi".to_string(),
            student_name: "Asha".to_string(),
            incomplete_tasks: Vec::new(),
        };
        assert!(LogNotifier.send(&payload));
    }
}
