//! Page Commands
//!
//! Frontend bindings for page endpoints.

use gloo_net::http::Request;

use crate::error::CommandError;
use crate::models::{Page, PageDraft};
use super::{get_json, send_json};

pub async fn list_pages(api_base: &str) -> Result<Vec<Page>, CommandError> {
    get_json(&format!("{}/pages", api_base)).await
}

pub async fn create_page(api_base: &str, draft: &PageDraft) -> Result<Page, CommandError> {
    send_json(Request::post(&format!("{}/pages", api_base)), draft).await
}

pub async fn update_page(api_base: &str, id: u32, draft: &PageDraft) -> Result<Page, CommandError> {
    send_json(Request::put(&format!("{}/pages/{}", api_base, id)), draft).await
}
