//! Scripted transport and navigator for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::api::{ApiClient, ApiError};
use super::transport::{HttpRequest, HttpResponse, Navigator, Transport};
use crate::state::session::Session;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub(crate) struct MockTransport {
    pub sent: Mutex<Vec<HttpRequest>>,
    pub responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl MockTransport {
    pub fn respond(status: u16, body: &str) -> Arc<Self> {
        let mock = Self::default();
        mock.push(status, body);
        Arc::new(mock)
    }

    pub fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn last(&self) -> HttpRequest {
        self.sent.lock().unwrap().last().cloned().expect("a request was sent")
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_owned())))
    }
}

/// Records every navigation target.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_owned());
    }
}

/// Client over `transport` with an in-memory session holding `token`.
pub(crate) fn client_with(transport: Arc<MockTransport>, token: Option<&str>) -> ApiClient {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.store(token, &crate::state::session::User { email: "a@b.com".to_owned(), hospital_name: None });
    }
    ApiClient::new("http://127.0.0.1:8000", session, transport, Arc::new(RecordingNavigator::default()))
}
