//! Command layer
//!
//! Intent parsing, dispatch into the engine, the console session driver and
//! the success notifier.

pub mod console;
pub mod dispatch;
pub mod intent;
pub mod notify;

pub use console::run_console;
pub use dispatch::{Response, SessionEnd, dispatch};
pub use intent::{Intent, IntentError};
pub use notify::{HttpNotifier, Notifier, NotifyError, NotifyProgress};
