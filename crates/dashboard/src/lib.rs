pub mod cache;
pub mod command;
pub mod filter;
pub mod render;
pub mod session;
pub mod toggle;

pub use cache::{CacheKey, QueryCache};
pub use command::{execute, parse, Command, Reply};
pub use filter::{apply_filters, FilterState};
pub use session::{PreferenceDomain, Session, SyncStatus, LOAD_ERROR_MESSAGE};
