//! SQLite persistence for sessions and templates.

mod pool;
mod session;
mod template;

pub use pool::{DatabasePool, default_database_url};
pub use session::SqliteSessionRepository;
pub use template::SqliteTemplateRepository;
