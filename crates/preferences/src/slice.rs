use std::marker::PhantomData;
use std::sync::Arc;

use common::{BrieflyError, BrieflyResult, Document, DocumentStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::identity::IdentityProvider;

/// One field of a per-user document, read and written on its own.
///
/// Writes merge only this field, so slices sharing a document never
/// clobber each other. Failures are logged and returned; there is no retry.
pub struct PreferenceSlice<T> {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
    collection: String,
    field: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> PreferenceSlice<T>
where
    T: DeserializeOwned + Default,
{
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        collection: &str,
        field: &'static str,
    ) -> Self {
        Self {
            store,
            identity,
            collection: collection.to_string(),
            field,
            _value: PhantomData,
        }
    }

    pub async fn load(&self) -> BrieflyResult<T> {
        let user_id = self.identity.user_id();
        let document = self
            .store
            .get(&self.collection, user_id)
            .await
            .map_err(|e| {
                error!("Failed to load {} for {}: {}", self.field, user_id, e);
                e
            })?;

        let Some(mut document) = document else {
            return Ok(T::default());
        };

        match document.remove(self.field) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => Ok(serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Ignoring malformed {} in {}/{}: {}", self.field, self.collection, user_id, e);
                T::default()
            })),
        }
    }

    pub async fn save<V>(&self, value: &V) -> BrieflyResult<()>
    where
        V: Serialize + Sync + ?Sized,
    {
        let user_id = self.identity.user_id();
        let value = serde_json::to_value(value)
            .map_err(|e| BrieflyError::Parse(format!("Failed to encode {}: {}", self.field, e)))?;

        let mut fields = Document::new();
        fields.insert(self.field.to_string(), value);

        self.store
            .merge(&self.collection, user_id, fields)
            .await
            .map_err(|e| {
                error!("Failed to save {} for {}: {}", self.field, user_id, e);
                e
            })
    }
}
