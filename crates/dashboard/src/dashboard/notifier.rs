use std::{io::Write, sync::Arc};
use tracing::warn;

/// Audible alert raised when new orders arrive.
pub trait Notifier {
    fn ring(&self);
}

pub type DynNotifier = Arc<dyn Notifier + Send + Sync>;

/// Rings the terminal bell of the process running the dashboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Notifier for TerminalBell {
    fn ring(&self) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            warn!("Failed to play bell sound: {e}");
        }
    }
}
