//! Shared mock transport for offline tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use finadvisor::{Request, Response};

pub struct MockResponse {
    status: u16,
    body: String,
    request_id: Option<String>,
}

impl Response for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn request_id(&self) -> &Option<String> {
        &self.request_id
    }
}

/// Canned-response HTTP client. GET requests are routed by URL substring;
/// POST requests always answer with `post_body`. Every request bumps the
/// shared counter so tests can assert on network traffic.
#[derive(Clone, Default)]
pub struct MockHttp {
    routes: Vec<(&'static str, String)>,
    post_body: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for any GET whose URL contains `needle`
    pub fn route(mut self, needle: &'static str, body: impl Into<String>) -> Self {
        self.routes.push((needle, body.into()));
        self
    }

    /// Serve `body` for every POST
    pub fn on_post(mut self, body: impl Into<String>) -> Self {
        self.post_body = Some(body.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Request for MockHttp {
    type Response = MockResponse;

    fn new() -> Self {
        Self::default()
    }

    async fn get(&self, url: &str) -> finadvisor::Result<MockResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for (needle, body) in &self.routes {
            if url.contains(needle) {
                return Ok(MockResponse {
                    status: 200,
                    body: body.clone(),
                    request_id: None,
                });
            }
        }
        Ok(MockResponse {
            status: 404,
            body: format!("no canned response for {url}"),
            request_id: None,
        })
    }

    async fn post(
        &self,
        url: &str,
        _body: &str,
        _bearer: Option<&str>,
    ) -> finadvisor::Result<MockResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.post_body {
            Some(body) => Ok(MockResponse {
                status: 200,
                body: body.clone(),
                request_id: None,
            }),
            None => Ok(MockResponse {
                status: 404,
                body: format!("no canned POST response for {url}"),
                request_id: None,
            }),
        }
    }
}
