//! API Wrappers
//!
//! Frontend helpers around the property client: request timeouts and the
//! degrade-to-empty policy for lookup lists.

use std::future::Future;
use std::pin::pin;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use property_search::{ApiError, DictionaryItem, DictionaryKind, HttpTransport, PropertyClient};

pub type Client = PropertyClient<HttpTransport>;

/// Resolve `request`, or fail with `ApiError::Timeout` after `timeout_ms`.
/// A zero timeout waits forever.
pub async fn with_timeout<T, E>(timeout_ms: u32, request: impl Future<Output = Result<T, E>>) -> Result<T, E>
where
    E: From<ApiError>,
{
    if timeout_ms == 0 {
        return request.await;
    }
    let request = pin!(request);
    let timer = pin!(TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((response, _)) => response,
        Either::Right(_) => Err(ApiError::Timeout(timeout_ms).into()),
    }
}

/// Lookup list for a selector; failures and timeouts yield an empty list
pub async fn load_dictionary(client: Client, timeout_ms: u32, kind: DictionaryKind) -> Vec<DictionaryItem> {
    let request = async { Ok::<_, ApiError>(client.list_dictionary(kind).await) };
    match with_timeout(timeout_ms, request).await {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Failed to load {:?} dictionary: {}", kind, e);
            Vec::new()
        }
    }
}
