//! Notices shown as browser alerts.

use partes_view::{Notice, Notifier};
use web_sys::Window;

pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&mut self, notice: Notice) {
        if let Err(e) = self.window.alert_with_message(&notice.message) {
            tracing::warn!(error = ?e, "alert failed");
        }
    }
}
