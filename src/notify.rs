//! Completion notifications
//!
//! Best-effort side effects fired when a timer interval ends. Failures are
//! logged and never propagate; there is no retry.

/// Sink for timer completion alerts
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Terminal notifier: rings the bell and prints the message
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        // BEL is the terminal stand-in for the audio cue
        println!("\x07{}: {}", title, body);
        log::info!("Notification: {} - {}", title, body);
    }
}

/// Notifier that only logs, for headless use
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        log::info!("Notification: {} - {}", title, body);
    }
}
