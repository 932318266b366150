//! HTTP request handlers.

mod health;
mod logs;
pub(crate) mod problem_details;
mod ui;
mod version;

pub use health::{livez, readyz};
pub use logs::{clear_logs, list_logs, replace_logs};
pub use ui::index;
pub use version::version;
