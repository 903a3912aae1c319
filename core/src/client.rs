//! Stateless HTTP request builder and response parser for the book API.
//!
//! # Design
//! `BookClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Success is decided by the response status alone; a body is only decoded
//! once the status is known to be 2xx.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, BookId, BookPatch, NewBook};

/// Synchronous, stateless client for the book API.
#[derive(Debug, Clone)]
pub struct BookClient {
    base_url: String,
}

impl BookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_books(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_path(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_book(&self, id: BookId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_book(&self, input: &NewBook) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_path(), input)
    }

    pub fn build_update_book(&self, id: BookId, input: &BookPatch) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_path(id), input)
    }

    pub fn build_delete_book(&self, id: BookId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        check_status(&response, None)?;
        decode(&response)
    }

    pub fn parse_get_book(&self, id: BookId, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response, Some(id))?;
        decode(&response)
    }

    pub fn parse_create_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response, None)?;
        decode(&response)
    }

    pub fn parse_update_book(&self, id: BookId, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response, Some(id))?;
        decode(&response)
    }

    pub fn parse_delete_book(&self, id: BookId, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, Some(id))
    }

    fn collection_path(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn item_path(&self, id: BookId) -> String {
        format!("{}/books/{id}", self.base_url)
    }
}

fn json_request<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
///
/// `resource` is the id of the single book being addressed; collection-level
/// operations pass `None` and never produce `NotFound`.
fn check_status(response: &HttpResponse, resource: Option<BookId>) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    match resource {
        Some(id) if response.status == 404 => Err(ApiError::NotFound { id }),
        _ => Err(ApiError::RequestFailed {
            status: response.status,
            status_text: response.status_text.clone(),
        }),
    }
}
