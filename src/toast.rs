use log::info;

/// Fire-and-forget toast surface; the host renders and auto-dismisses.
pub trait Notifier {
    fn show(&mut self, text: &str);
}

/// Stock notifier that forwards toasts to the log output, for hosts
/// without a toast surface of their own.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&mut self, text: &str) {
        info!("{text}");
    }
}
