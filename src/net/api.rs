//! Token-aware REST client for the follow-up backend.
//!
//! Every backend call goes through [`ApiClient`]: it attaches the session's
//! bearer token, encodes and decodes JSON, and translates HTTP failures into
//! [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! [`ApiClient::outcome`] reports the classified response as an [`ApiOutcome`]
//! with no side effects. [`ApiClient::request`] builds on it: a 401/403 clears
//! the stored token and navigates to the unauthorized route once, then still
//! fails with [`ApiError::Unauthorized`]. No call is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::transport::{BrowserTransport, HttpRequest, LocationNavigator, Method, Navigator, Transport};
use super::types::{AuthResponse, CallDetail, CallRecord, DialResponse, NewPatient, Patient, PatientUpdate, QuestionsPayload};
use crate::config;
use crate::state::session::Session;

/// Backend body fragment identifying a duplicate signup.
pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API Error ({status}): {body}")]
    Unauthorized { status: u16, body: String },
    #[error("API Error ({status}): {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected a signup because the email exists.
    pub fn is_email_already_registered(&self) -> bool {
        match self {
            Self::Http { body, .. } | Self::Unauthorized { body, .. } => body.contains(EMAIL_ALREADY_REGISTERED),
            _ => false,
        }
    }
}

/// Classified backend response.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome {
    /// 2xx; `None` for 204 or an empty body.
    Ok(Option<Value>),
    /// 401 or 403: the stored token was rejected.
    Unauthorized { status: u16, body: String },
    /// Any other non-2xx status with its raw body text.
    Failed { status: u16, body: String },
}

/// Classify a status code and raw body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when a 2xx body other than 204 is not JSON.
pub fn classify(status: u16, body: String) -> Result<ApiOutcome, ApiError> {
    match status {
        401 | 403 => Ok(ApiOutcome::Unauthorized { status, body }),
        204 => Ok(ApiOutcome::Ok(None)),
        200..=299 => {
            if body.trim().is_empty() {
                return Ok(ApiOutcome::Ok(None));
            }
            serde_json::from_str(&body)
                .map(|v| ApiOutcome::Ok(Some(v)))
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        _ => Ok(ApiOutcome::Failed { status, body }),
    }
}

/// Headers attached to every backend request.
pub fn request_headers(token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    headers
}

/// Method, path, and optional JSON body of a backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Client shared through Leptos context. Clones share session and transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    unauthorized_route: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("unauthorized_route", &self.unauthorized_route)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Session,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
            navigator,
            unauthorized_route: config::UNAUTHORIZED_ROUTE.to_owned(),
        }
    }

    /// Client for the configured backend using browser HTTP and navigation.
    pub fn browser(session: Session) -> Self {
        Self::new(config::api_url(), session, Arc::new(BrowserTransport), Arc::new(LocationNavigator))
    }

    #[must_use]
    pub fn with_unauthorized_route(mut self, route: impl Into<String>) -> Self {
        self.unauthorized_route = route.into();
        self
    }

    fn build(&self, request: &ApiRequest) -> Result<HttpRequest, ApiError> {
        let body = request
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: request.method,
            url: config::join_url(&self.base_url, &request.path),
            headers: request_headers(self.session.token().as_deref()),
            body,
        })
    }

    /// Send a request and classify the response without touching the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be encoded, the transport fails,
    /// or a 2xx body is not valid JSON.
    pub async fn outcome(&self, request: &ApiRequest) -> Result<ApiOutcome, ApiError> {
        let http = self.build(request)?;
        let resp = self.transport.send(http).await?;
        classify(resp.status, resp.body)
    }

    /// Send a request, returning the decoded JSON body (`None` for 204).
    ///
    /// On 401/403 the stored token is cleared and the browser is sent to the
    /// unauthorized route before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for 401/403, [`ApiError::Http`] for
    /// other non-2xx statuses, and transport/decode errors as they occur.
    pub async fn request(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        match self.outcome(&request).await? {
            ApiOutcome::Ok(data) => {
                log::debug!("[API {}] {}", request.path, data.as_ref().map_or_else(|| "null".to_owned(), Value::to_string));
                Ok(data)
            }
            ApiOutcome::Unauthorized { status, body } => {
                log::warn!("[API {}] rejected credentials ({status})", request.path);
                self.session.clear_token();
                self.navigator.navigate(&self.unauthorized_route);
                Err(ApiError::Unauthorized { status, body })
            }
            ApiOutcome::Failed { status, body } => Err(ApiError::Http { status, body }),
        }
    }

    async fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let data = self.request(request).await?.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn persist_auth(&self, resp: &AuthResponse, action: &str) {
        match (&resp.access_token, &resp.user) {
            (Some(token), Some(user)) => self.session.store(token, user),
            _ => log::warn!("{action} response missing token or user"),
        }
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Register an account and persist the issued session.
    ///
    /// # Errors
    ///
    /// Propagates request errors; see [`ApiError::is_email_already_registered`].
    pub async fn signup(&self, email: &str, password: &str, hospital_name: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password, "hospital_name": hospital_name });
        let resp: AuthResponse = self.request_json(ApiRequest::post("/auth/signup", body)).await?;
        self.persist_auth(&resp, "signup");
        Ok(resp)
    }

    /// Log in and persist the issued session.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        let resp: AuthResponse = self.request_json(ApiRequest::post("/auth/login", body)).await?;
        self.persist_auth(&resp, "login");
        Ok(resp)
    }

    // =========================================================================
    // PATIENTS
    // =========================================================================

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn get_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.request_json(ApiRequest::get("/patients")).await
    }

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn get_patient(&self, id: i64) -> Result<Patient, ApiError> {
        self.request_json(ApiRequest::get(format!("/patients/{id}"))).await
    }

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, ApiError> {
        self.request_json(ApiRequest::post("/patients", to_body(patient)?)).await
    }

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn update_patient(&self, id: i64, patient: &PatientUpdate) -> Result<(), ApiError> {
        self.request(ApiRequest::put(format!("/patients/{id}"), to_body(patient)?)).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn delete_patient(&self, id: i64) -> Result<(), ApiError> {
        self.request(ApiRequest::delete(format!("/patients/{id}"))).await?;
        Ok(())
    }

    /// Replace a patient's custom questions.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn set_patient_questions(&self, id: i64, questions: &[String]) -> Result<(), ApiError> {
        let body = to_body(&QuestionsPayload { questions })?;
        self.request(ApiRequest::post(format!("/patients/{id}/questions"), body)).await?;
        Ok(())
    }

    // =========================================================================
    // CALLS
    // =========================================================================

    /// Start a follow-up call for a patient.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn initiate_call(&self, patient_id: i64) -> Result<DialResponse, ApiError> {
        let data = self.request(ApiRequest::post("/dial", json!({ "patient_id": patient_id }))).await?;
        Ok(data.unwrap_or(Value::Null))
    }

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn get_patient_calls(&self, patient_id: i64) -> Result<Vec<CallRecord>, ApiError> {
        self.request_json(ApiRequest::get(format!("/patients/{patient_id}/calls"))).await
    }

    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn get_call_transcript(&self, call_id: i64) -> Result<CallDetail, ApiError> {
        self.request_json(ApiRequest::get(format!("/calls/{call_id}"))).await
    }
}
