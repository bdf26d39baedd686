mod confirm;
mod console;

pub use confirm::{AutoConfirm, StdinConfirm};
pub use console::ConsoleNotifier;
