pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod paywall;
pub mod source;
pub mod sources;
pub mod store;
pub mod supabase_client;
pub mod topic;

pub use config::Config;
pub use domain::{domain_of, matches_domain};
pub use error::{BrieflyError, BrieflyResult};
pub use models::{Article, Preset};
pub use paywall::is_likely_paywalled;
pub use source::NewsSource;
pub use sources::SourceGroup;
pub use store::{Document, DocumentStore, InMemoryDocumentStore};
pub use supabase_client::SupabaseDocumentStore;
pub use topic::Topic;
