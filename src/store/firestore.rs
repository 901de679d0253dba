//! Firestore Comment Store
//!
//! `CommentStore` backed by the Firestore REST API. Requests go through
//! `reqwest`, which uses the browser's fetch on wasm.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::{CommentStore, StoreError, StoreResult};
use crate::config::StoreConfig;
use crate::models::{Comment, CommentId, NewComment};

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: &str = "300";

// ========================
// Wire Types
// ========================

/// A Firestore typed value. Only the variants comments use are modelled;
/// anything else deserializes to an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Value {
    #[serde(skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    /// int64 values travel as decimal strings
    #[serde(skip_serializing_if = "Option::is_none")]
    integer_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    double_value: Option<f64>,
}

impl Value {
    fn string(s: &str) -> Self {
        Self {
            string_value: Some(s.to_string()),
            ..Default::default()
        }
    }

    fn double(v: f64) -> Self {
        Self {
            double_value: Some(v),
            ..Default::default()
        }
    }

    fn as_str(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    fn as_f64(&self) -> Option<f64> {
        self.double_value
            .or_else(|| self.integer_value.as_deref().and_then(|s| s.parse::<i64>().ok()).map(|v| v as f64))
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct WriteRequest {
    fields: BTreeMap<&'static str, Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

// ========================
// Codec
// ========================

/// Document id is the last segment of the resource name
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn decode_comment(doc: &Document) -> Result<Comment, String> {
    let string_field = |key: &str| {
        doc.fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| format!("missing string field `{}`", key))
    };
    let number_field = |key: &str| {
        doc.fields
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| format!("missing numeric field `{}`", key))
    };
    Ok(Comment {
        id: CommentId::new(document_id(&doc.name)),
        text: string_field("text")?,
        author: string_field("author")?,
        x: number_field("x")?,
        y: number_field("y")?,
    })
}

fn encode_comment(comment: &NewComment) -> WriteRequest {
    let mut fields = BTreeMap::new();
    fields.insert("text", Value::string(&comment.text));
    fields.insert("author", Value::string(&comment.author));
    fields.insert("x", Value::double(comment.x));
    fields.insert("y", Value::double(comment.y));
    fields.insert(
        "timestamp",
        Value::string(&comment.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    WriteRequest { fields }
}

fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> StoreResult<T> {
    serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Map a non-success response to an error, preferring the Google error
/// envelope's message when the body carries one
fn rejection(status: u16, body: &str) -> StoreError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.status.is_empty() => envelope.error.message,
        Ok(envelope) => format!("{}: {}", envelope.error.status, envelope.error.message),
        Err(_) => body.trim().to_string(),
    };
    StoreError::Rejected { status, message }
}

/// Decode every well-formed comment of a page; malformed documents are
/// logged and skipped
fn collect_comments(page: &ListPage, out: &mut Vec<Comment>) {
    for doc in &page.documents {
        match decode_comment(doc) {
            Ok(comment) => out.push(comment),
            Err(reason) => log::warn!("skipping document {}: {}", document_id(&doc.name), reason),
        }
    }
}

// ========================
// Store
// ========================

pub struct FirestoreStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl FirestoreStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            FIRESTORE_BASE_URL, self.config.project_id, self.config.database, self.config.collection
        )
    }

    async fn read_body(response: reqwest::Response) -> StoreResult<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(rejection(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> StoreResult<ListPage> {
        let mut query = vec![("key", self.config.api_key.as_str()), ("pageSize", PAGE_SIZE)];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }
        let response = self
            .client
            .get(self.collection_url())
            .query(&query)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let body = Self::read_body(response).await?;
        decode(&body)
    }
}

#[async_trait(?Send)]
impl CommentStore for FirestoreStore {
    async fn list_all(&self) -> StoreResult<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            collect_comments(&page, &mut comments);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(comments)
    }

    async fn insert_one(&self, comment: &NewComment) -> StoreResult<CommentId> {
        let response = self
            .client
            .post(self.collection_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&encode_comment(comment))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let body = Self::read_body(response).await?;
        let doc: Document = decode(&body)?;
        Ok(CommentId::new(document_id(&doc.name)))
    }
}
