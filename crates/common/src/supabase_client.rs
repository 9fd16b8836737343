use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::SupabaseConfig;
use crate::error::{BrieflyError, BrieflyResult};
use crate::store::{Document, DocumentStore};

const ID_COLUMN: &str = "id";

/// Documents kept as rows of PostgREST tables, one row per user id and one
/// JSON column per document field.
///
/// Upserts use `resolution=merge-duplicates`, which only assigns the
/// columns present in the payload, so sibling fields survive a write.
#[derive(Clone)]
pub struct SupabaseDocumentStore {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl SupabaseDocumentStore {
    pub fn new(rest_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            rest_url: rest_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &SupabaseConfig) -> Self {
        Self::new(&config.rest_url, &config.key)
    }

    fn table_url(&self, collection: &str) -> String {
        format!("{}/{}", self.rest_url, collection.trim_start_matches('/'))
    }
}

#[async_trait]
impl DocumentStore for SupabaseDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> BrieflyResult<Option<Document>> {
        let url = self.table_url(collection);
        debug!("Reading document {}/{} from Supabase", collection, id);

        let response = self
            .client
            .get(&url)
            .query(&[("id", format!("eq.{}", id)), ("select", "*".to_string())])
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(BrieflyError::Store(format!(
                "Failed to read {}/{} ({}): {}",
                collection, id, status, error_text
            )));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| BrieflyError::Parse(format!("Unexpected rows for {}: {}", collection, e)))?;

        Ok(rows.into_iter().find_map(|row| match row {
            Value::Object(mut fields) => {
                fields.remove(ID_COLUMN);
                Some(fields)
            }
            _ => None,
        }))
    }

    async fn merge(&self, collection: &str, id: &str, fields: Document) -> BrieflyResult<()> {
        let url = self.table_url(collection);
        let field_names = fields.keys().cloned().collect::<Vec<_>>().join(",");

        let mut row = fields;
        row.insert(ID_COLUMN.to_string(), Value::String(id.to_string()));

        info!("Merging [{}] into {}/{}", field_names, collection, id);

        let response = self
            .client
            .post(&url)
            .query(&[("on_conflict", ID_COLUMN)])
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&Value::Object(row))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(BrieflyError::Store(format!(
                "Failed to merge into {}/{} ({}): {}",
                collection, id, status, error_text
            )))
        }
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}
