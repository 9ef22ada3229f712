//! HTTP plumbing shared by the resource modules.
//!
//! Every call joins the configured base URL with the endpoint path, attaches
//! the bearer token from local storage, and turns non-success responses into
//! `ApiError` via `ApiError::from_response`. Failures are logged before being
//! returned. There are no retries and no timeouts beyond the browser's.

use std::cell::RefCell;
use std::rc::Rc;

use common::config::AppConfig;
use common::envelope::{unwrap_data, unwrap_list};
use common::error::ApiError;
use common::filters::ListQuery;
use common::table::Page;
use gloo_net::http::{Method, RequestBuilder};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::storage;

thread_local! {
    static CONFIG: RefCell<Rc<AppConfig>> = RefCell::new(Rc::new(AppConfig::default()));
}

/// Installs the runtime configuration used by all subsequent requests.
pub fn configure(config: AppConfig) {
    CONFIG.with(|current| *current.borrow_mut() = Rc::new(config));
}

pub fn config() -> Rc<AppConfig> {
    CONFIG.with(|current| current.borrow().clone())
}

/// Issues one request and returns the parsed JSON body (`Null` when empty).
pub async fn send(
    method: Method,
    path: &str,
    query: &[(String, String)],
    body: Option<Value>,
) -> Result<Value, ApiError> {
    let url = config().endpoint(path);
    debug!("{method} {url}");

    let mut builder = RequestBuilder::new(&url)
        .method(method.clone())
        .query(query.iter().map(|(key, value)| (key.as_str(), value.as_str())));
    if let Some(token) = storage::auth_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match &body {
        Some(payload) => builder.json(payload),
        None => builder.build(),
    }
    .map_err(|e| fail(&method, path, ApiError::Network(e.to_string())))?;

    let response = request
        .send()
        .await
        .map_err(|e| fail(&method, path, ApiError::Network(e.to_string())))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| fail(&method, path, ApiError::Network(e.to_string())))?;

    if !response.ok() {
        let err = ApiError::from_response(status, &text);
        if err == ApiError::Unauthorized {
            storage::clear_auth_token();
        }
        return Err(fail(&method, path, err));
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| fail(&method, path, ApiError::Decode(e.to_string())))
}

fn fail(method: &Method, path: &str, err: ApiError) -> ApiError {
    error!("{method} {path} failed: {err}");
    err
}

fn to_body<B: Serialize>(payload: &B) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    unwrap_data(send(Method::GET, path, &[], None).await?)
}

pub async fn get_list<T: DeserializeOwned>(path: &str, query: &ListQuery) -> Result<Page<T>, ApiError> {
    unwrap_list(send(Method::GET, path, &query.to_pairs(), None).await?)
}

/// Collections that are not paginated (categories, dropdown sources).
pub async fn get_all<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let page: Page<T> = unwrap_list(send(Method::GET, path, &[], None).await?)?;
    Ok(page.items)
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, payload: &B) -> Result<T, ApiError> {
    unwrap_data(send(Method::POST, path, &[], Some(to_body(payload)?)).await?)
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, payload: &B) -> Result<T, ApiError> {
    unwrap_data(send(Method::PUT, path, &[], Some(to_body(payload)?)).await?)
}

/// Fire-and-check variants for endpoints whose response body is irrelevant.
pub async fn post_unit<B: Serialize>(path: &str, payload: &B) -> Result<(), ApiError> {
    send(Method::POST, path, &[], Some(to_body(payload)?)).await.map(|_| ())
}

pub async fn put_unit<B: Serialize>(path: &str, payload: &B) -> Result<(), ApiError> {
    send(Method::PUT, path, &[], Some(to_body(payload)?)).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Method::DELETE, path, &[], None).await.map(|_| ())
}
