//! Client core for a remote book collection.
//!
//! # Overview
//! `BookClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `RecordApi` pairs it with a `Transport` to
//! run each operation as one async round trip, and `CollectionController`
//! keeps a local copy of the collection plus loading/error/editing state in
//! step with those operations.
//!
//! # Design
//! - `BookClient` is stateless; it holds only `base_url`.
//! - Response status decides success. Bodies of non-2xx responses are never
//!   decoded as data.
//! - The endpoint is explicit configuration (`ClientConfig`), so tests swap
//!   in a scripted transport or a local mock server.
//! - User input is validated in `form` before any request is built.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod transport;
pub mod types;

pub use api::RecordApi;
pub use client::BookClient;
pub use config::{ClientConfig, ConfigError};
pub use controller::{CollectionController, CollectionIntent, CollectionState, CollectionView};
pub use error::{ApiError, TransportError};
pub use form::{BookForm, Clock, FixedClock, SystemClock};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Book, BookId, BookPatch, NewBook, DEFAULT_GENRE};
