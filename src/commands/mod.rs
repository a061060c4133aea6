//! REST Command Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.

mod page;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CommandError;

// Re-export all public items
pub use page::*;

/// Attach a JSON body to a request
fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, CommandError> {
    builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| CommandError::Encode(e.to_string()))
}

/// Check the status and decode the JSON response body
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, CommandError> {
    if !response.ok() {
        return Err(CommandError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| CommandError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, CommandError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;
    decode_json(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(builder: RequestBuilder, body: &B) -> Result<T, CommandError> {
    let response = with_json(builder, body)?.send().await?;
    decode_json(response).await
}
