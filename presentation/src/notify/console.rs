//! Notifications printed as one-line toasts on stderr

use battle_application::{Notification, NotificationLevel, Notifier};
use colored::Colorize;

/// Prints each notification as `[Title] description`
///
/// Written to stderr so toasts never end up in piped column or JSON output.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notification: &Notification) -> String {
        let title = format!("[{}]", notification.title);
        let title = match notification.level {
            NotificationLevel::Info => title.green().bold(),
            NotificationLevel::Error => title.red().bold(),
        };
        format!("{} {}", title, notification.description)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::render(&notification));
    }
}
