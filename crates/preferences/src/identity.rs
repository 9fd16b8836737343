//! Anonymous user identity.
//!
//! The id is not a real identity: it is generated once per installation and
//! only addresses the user's preference documents.

use std::fs;
use std::path::{Path, PathBuf};

use common::{BrieflyError, BrieflyResult};
use rand::Rng;
use time::OffsetDateTime;
use tracing::info;

const ID_PREFIX: &str = "u_";

pub trait IdentityProvider: Send + Sync {
    fn user_id(&self) -> &str;
}

/// Fixed id, for tests and for callers that already know who the user is.
#[derive(Debug, Clone)]
pub struct StaticIdentity(String);

impl StaticIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn user_id(&self) -> &str {
        &self.0
    }
}

/// Id persisted in a single local file, created on first use.
#[derive(Debug, Clone)]
pub struct LocalIdentity {
    id: String,
    path: PathBuf,
}

impl LocalIdentity {
    pub fn load_or_create(path: impl AsRef<Path>) -> BrieflyResult<Self> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            let stored = fs::read_to_string(&path)?;
            let stored = stored.trim();
            if !stored.is_empty() {
                return Ok(Self {
                    id: stored.to_string(),
                    path,
                });
            }
        }

        let id = generate_user_id();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &id).map_err(|e| {
            BrieflyError::Identity(format!("Failed to store user id at {}: {}", path.display(), e))
        })?;
        info!("Generated anonymous user id at {}", path.display());

        Ok(Self { id, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityProvider for LocalIdentity {
    fn user_id(&self) -> &str {
        &self.id
    }
}

/// `u_` followed by a random base-36 run and the base-36 unix millis.
pub fn generate_user_id() -> String {
    let random: u64 = rand::thread_rng().gen();
    let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!(
        "{}{}{}",
        ID_PREFIX,
        to_base36(u128::from(random)),
        to_base36(now_ms.unsigned_abs())
    )
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn generated_ids_have_prefix_and_differ() {
        let a = generate_user_id();
        let b = generate_user_id();
        assert!(a.starts_with("u_"));
        assert!(a[2..].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
