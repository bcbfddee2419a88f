//! API Client
//!
//! `Transport` is the seam between typed calls and the wire. `HttpTransport`
//! talks to the REST API through reqwest; tests plug in an in-memory one.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, SubmitError};
use crate::models::{DictionaryItem, DictionaryKind, NewProperty, Property};
use crate::paged::PagedResult;
use crate::query::NormalizedQuery;
use crate::validation::PropertyDraft;

pub const PROPERTIES_PATH: &str = "/api/properties";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request before it hits the wire. GET carries its payload as query
/// pairs, the other methods as a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }
}

/// Sends a request and yields the decoded JSON body.
///
/// Any status >= 400 must come back as `ApiError::Status` carrying the raw
/// body; transport failures as `ApiError::Transport`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.config.url(&request.path);
        log::debug!("{:?} {} {:?}", request.method, url, request.query);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status >= 400 {
            return Err(ApiError::Status { status, body: text });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Typed calls against the property REST API
#[derive(Clone)]
pub struct PropertyClient<T> {
    transport: T,
}

impl<T: Transport> PropertyClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/properties` with the normalized query as parameters
    pub async fn search_properties(&self, query: &NormalizedQuery) -> ApiResult<PagedResult<Property>> {
        let value = self
            .transport
            .send(ApiRequest::get(PROPERTIES_PATH, query.to_query_pairs()))
            .await?;
        let page: PagedResult<Property> = serde_json::from_value(value)?;
        Ok(page.normalized())
    }

    /// `POST /api/properties`. Returns the created entity when the server
    /// echoes one back.
    pub async fn create_property(&self, property: &NewProperty) -> ApiResult<Option<Property>> {
        let body = serde_json::to_value(property)?;
        let value = self.transport.send(ApiRequest::post(PROPERTIES_PATH, body)).await?;
        match serde_json::from_value::<Property>(value) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                log::debug!("create_property: response is not a property ({})", e);
                Ok(None)
            }
        }
    }

    /// Validate the form draft and create it. An invalid draft never reaches
    /// the transport.
    pub async fn submit(&self, draft: &PropertyDraft) -> Result<Option<Property>, SubmitError> {
        let payload = draft.validate().map_err(SubmitError::Invalid)?;
        Ok(self.create_property(&payload).await?)
    }

    pub async fn try_list_dictionary(&self, kind: DictionaryKind) -> ApiResult<Vec<DictionaryItem>> {
        let value = self.transport.send(ApiRequest::get(kind.path(), Vec::new())).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Lookup list for a selector. Any failure degrades to an empty list.
    pub async fn list_dictionary(&self, kind: DictionaryKind) -> Vec<DictionaryItem> {
        match self.try_list_dictionary(kind).await {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Failed to load {:?} dictionary: {}", kind, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses in order and records every request
    #[derive(Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<ApiResult<Value>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn with(responses: Vec<ApiResult<Value>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no canned response".to_string())))
        }
    }
}
