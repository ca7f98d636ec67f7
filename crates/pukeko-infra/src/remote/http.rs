//! HTTP implementations of the remote gateway ports.
//!
//! Speaks a plain REST document API: `/collections/{name}/docs` for CRUD,
//! `/collections/{name}/query` for filtered reads and `/functions/{name}`
//! for remote procedures. No timeout is imposed here; a hung call simply
//! never resolves, and the facade only falls back on explicit failure.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use pukeko_core::error::GatewayError;
use pukeko_core::ports::{DocumentStore, Filter, OrderBy, RemoteProcedures};

/// Document-store client over HTTP.
pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn doc_url(&self, collection: &str, id: &str) -> String {
        format!("{}/collections/{}/docs/{}", self.base_url, collection, id)
    }
}

/// Map a response status onto the gateway taxonomy; 404 is the remote
/// store reporting absence, everything else non-2xx is unreachability.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound);
    }
    if !status.is_success() {
        return Err(GatewayError::Unreachable(format!(
            "remote returned status {}",
            status
        )));
    }
    Ok(response)
}

fn send_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Unreachable(err.to_string())
}

fn body_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Unreachable(format!("invalid response body: {}", err))
}

#[derive(Deserialize)]
struct InsertResponse {
    id: String,
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn query(
        &self,
        collection: &str,
        filters: &[Filter],
        order: Option<OrderBy>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>, GatewayError> {
        let body = json!({
            "filters": filters
                .iter()
                .map(|f| json!({"field": f.field, "value": f.value}))
                .collect::<Vec<_>>(),
            "order_by": order.as_ref().map(|o| o.field.clone()),
            "descending": order.as_ref().map(|o| o.descending).unwrap_or(false),
            "limit": limit,
        });

        let response = self
            .client
            .post(format!(
                "{}/collections/{}/query",
                self.base_url, collection
            ))
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;

        check_status(response)?.json().await.map_err(body_error)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Value, GatewayError> {
        let response = self
            .client
            .get(self.doc_url(collection, id))
            .send()
            .await
            .map_err(send_error)?;

        check_status(response)?.json().await.map_err(body_error)
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(format!("{}/collections/{}/docs", self.base_url, collection))
            .json(&record)
            .send()
            .await
            .map_err(send_error)?;

        let created: InsertResponse = check_status(response)?.json().await.map_err(body_error)?;
        Ok(created.id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Value,
    ) -> Result<(), GatewayError> {
        let response = self
            .client
            .patch(self.doc_url(collection, id))
            .json(&partial)
            .send()
            .await
            .map_err(send_error)?;

        check_status(response)?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.doc_url(collection, id))
            .send()
            .await
            .map_err(send_error)?;

        check_status(response)?;
        Ok(())
    }
}

/// Remote-procedure client over HTTP.
pub struct HttpFunctions {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFunctions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RemoteProcedures for HttpFunctions {
    async fn invoke(&self, name: &str, payload: Value) -> Result<Value, GatewayError> {
        tracing::debug!(function = %name, "Invoking remote procedure");

        let response = self
            .client
            .post(format!("{}/functions/{}", self.base_url, name))
            .json(&payload)
            .send()
            .await
            .map_err(send_error)?;

        check_status(response)?.json().await.map_err(body_error)
    }
}
