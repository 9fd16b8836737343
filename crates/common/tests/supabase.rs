use common::{BrieflyError, Document, DocumentStore, SupabaseDocumentStore};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fields(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("test documents are objects"),
    }
}

#[tokio::test]
async fn get_returns_row_without_id_column() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/userPrefs"))
        .and(query_param("id", "eq.u_abc"))
        .and(header("apikey", "secret"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "u_abc", "presets": [], "pinnedSources": ["bbc.com"] }
        ])))
        .mount(&server)
        .await;

    let store = SupabaseDocumentStore::new(&format!("{}/rest/v1", server.uri()), "secret");
    let doc = store.get("userPrefs", "u_abc").await.unwrap().unwrap();

    assert!(doc.get("id").is_none());
    assert_eq!(doc.get("pinnedSources"), Some(&json!(["bbc.com"])));
}

#[tokio::test]
async fn get_of_missing_row_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/bookmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = SupabaseDocumentStore::new(&format!("{}/rest/v1/", server.uri()), "secret");
    assert!(store.get("bookmarks", "u_abc").await.unwrap().is_none());
}

#[tokio::test]
async fn merge_upserts_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/userPrefs"))
        .and(query_param("on_conflict", "id"))
        .and(header("Prefer", "resolution=merge-duplicates,return=minimal"))
        .and(body_json(json!({ "id": "u_abc", "pinnedSources": ["cbc.ca"] })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let store = SupabaseDocumentStore::new(&format!("{}/rest/v1", server.uri()), "secret");
    store
        .merge("userPrefs", "u_abc", fields(json!({ "pinnedSources": ["cbc.ca"] })))
        .await
        .unwrap();
}

#[tokio::test]
async fn server_errors_surface_as_store_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = SupabaseDocumentStore::new(&format!("{}/rest/v1", server.uri()), "secret");

    let write = store.merge("bookmarks", "u_abc", fields(json!({ "articles": [] }))).await;
    assert!(matches!(write, Err(BrieflyError::Store(message)) if message.contains("boom")));

    let read = store.get("bookmarks", "u_abc").await;
    assert!(matches!(read, Err(BrieflyError::Store(_))));
}
