//! Shared fixtures: a live mock server on a random port and a scripted
//! in-memory transport.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bookshelf_core::{
    BookClient, HttpRequest, HttpResponse, RecordApi, Transport, TransportError,
};

/// Start the mock server on a random port and return its base URL.
pub fn spawn_server(seed: Vec<mock_server::NewBook>) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, seed).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Answers requests from a queue, in the order `execute` is called, and
/// records every request it sees.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new(message)));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn api(&self) -> RecordApi<ScriptedTransport> {
        RecordApi::new(BookClient::new("http://books.test"), self.clone())
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}
