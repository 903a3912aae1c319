//! Async book operations: one `BookClient` build/parse pair around one
//! `Transport` round trip each.

use crate::client::BookClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Book, BookId, BookPatch, NewBook};

/// Remote book collection. Stateless per call; clone it freely to hand a copy
/// to a pending operation.
#[derive(Debug, Clone)]
pub struct RecordApi<T> {
    client: BookClient,
    transport: T,
}

impl RecordApi<UreqTransport> {
    /// API backed by a real HTTP agent.
    pub fn connect(base_url: &str) -> Self {
        Self::new(BookClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> RecordApi<T> {
    pub fn new(client: BookClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &BookClient {
        &self.client
    }

    pub async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.send(self.client.build_list_books()).await?;
        self.client.parse_list_books(response)
    }

    pub async fn get_by_id(&self, id: BookId) -> Result<Book, ApiError> {
        let response = self.send(self.client.build_get_book(id)).await?;
        self.client.parse_get_book(id, response)
    }

    pub async fn create(&self, draft: &NewBook) -> Result<Book, ApiError> {
        let request = self.client.build_create_book(draft)?;
        let response = self.send(request).await?;
        self.client.parse_create_book(response)
    }

    pub async fn update(&self, id: BookId, patch: &BookPatch) -> Result<Book, ApiError> {
        let request = self.client.build_update_book(id, patch)?;
        let response = self.send(request).await?;
        self.client.parse_update_book(id, response)
    }

    pub async fn remove(&self, id: BookId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_book(id)).await?;
        self.client.parse_delete_book(id, response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        tracing::debug!(method, %path, "sending request");
        match self.transport.execute(request).await {
            Ok(response) => {
                tracing::debug!(method, %path, status = response.status, "received response");
                Ok(response)
            }
            Err(err) => {
                tracing::debug!(method, %path, error = %err, "transport failed");
                Err(err.into())
            }
        }
    }
}
