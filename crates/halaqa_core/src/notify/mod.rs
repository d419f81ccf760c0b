//! Post-commit notification contract.
//!
//! # Responsibility
//! - Define the fire-and-forget delivery seam consumed by the service layer.
//! - Provide the default diagnostic-log sink.
//!
//! # Invariants
//! - Dispatch happens only after a successful commit.
//! - No delivery guarantee, no retry; the core never waits on a sink.

use log::info;

/// One message addressed to one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub message: String,
}

impl Notification {
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
        }
    }
}

/// Delivery channel seam.
///
/// The default implementation only records to the diagnostic log; a real
/// deployment swaps in an actual channel. Implementations must not block
/// the caller on delivery.
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification);
    }
}

/// Sink that records each notification to the diagnostic log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: &Notification) {
        info!(
            "event=notify module=notify status=ok recipient={} message={}",
            notification.recipient, notification.message
        );
    }
}
