//! HTTP request builder and response parser for the AdoteAI backend.
//!
//! # Design
//! `AdoteClient` holds the backend origin and, after a login, the bearer
//! token. Every call is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The short-hand methods (`login`, `find_match`, ...) glue both halves
//! around a `Transport`; they add no behaviour of their own.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Animal, LoginRequest, LoginResponse, MatchRequest, MatchResponse, MatchResult};

/// Path prefix under which the backend mounts every endpoint.
pub const API_PREFIX: &str = "/api";

/// Client for the AdoteAI API. Carries no state between calls apart from the
/// optional bearer token.
#[derive(Debug, Clone)]
pub struct AdoteClient {
    base_url: String,
    token: Option<String>,
}

impl AdoteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Replace the bearer token attached to subsequent requests.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    pub fn build_login(&self, input: &LoginRequest) -> Result<HttpRequest, ApiError> {
        self.post("/auth/login", input)
    }

    /// A `success: false` body with a 2xx status is returned as-is; deciding
    /// what it means is up to the caller.
    pub fn parse_login(&self, response: HttpResponse) -> Result<LoginResponse, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn login<T: Transport + ?Sized>(
        &self,
        transport: &T,
        input: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let request = self.build_login(input)?;
        self.parse_login(transport.execute(request)?)
    }

    // -----------------------------------------------------------------------
    // Match
    // -----------------------------------------------------------------------

    pub fn build_find_match(&self, input: &MatchRequest) -> Result<HttpRequest, ApiError> {
        self.post("/match", input)
    }

    /// Fails with `ApiError::NoMatch` when the backend reports
    /// `success: false` or leaves out the animal.
    pub fn parse_find_match(&self, response: HttpResponse) -> Result<MatchResult, ApiError> {
        check_status(&response)?;
        let body: MatchResponse = decode(&response)?;
        match (body.success, body.animal) {
            (true, Some(animal)) => Ok(MatchResult {
                animal,
                match_score: body.match_score,
                ia_reasoning: body.ia_reasoning,
            }),
            _ => Err(ApiError::NoMatch),
        }
    }

    pub fn find_match<T: Transport + ?Sized>(
        &self,
        transport: &T,
        input: &MatchRequest,
    ) -> Result<MatchResult, ApiError> {
        let request = self.build_find_match(input)?;
        self.parse_find_match(transport.execute(request)?)
    }

    // -----------------------------------------------------------------------
    // Animals
    // -----------------------------------------------------------------------

    pub fn build_list_animals(&self) -> HttpRequest {
        self.get("/animals")
    }

    pub fn parse_list_animals(&self, response: HttpResponse) -> Result<Vec<Animal>, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn list_animals<T: Transport + ?Sized>(&self, transport: &T) -> Result<Vec<Animal>, ApiError> {
        self.parse_list_animals(transport.execute(self.build_list_animals())?)
    }

    pub fn build_get_animal(&self, id: i64) -> HttpRequest {
        self.get(&format!("/animals/{id}"))
    }

    pub fn parse_get_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn get_animal<T: Transport + ?Sized>(&self, transport: &T, id: i64) -> Result<Animal, ApiError> {
        self.parse_get_animal(transport.execute(self.build_get_animal(id))?)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn url(&self, endpoint: &str) -> String {
        format!("{}{API_PREFIX}{endpoint}", self.base_url)
    }

    fn get(&self, endpoint: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(endpoint),
            headers: self.auth_headers(),
            body: None,
        }
    }

    fn post<B: Serialize>(&self, endpoint: &str, input: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(self.auth_headers());
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(endpoint),
            headers,
            body: Some(body),
        })
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        match &self.token {
            Some(token) => vec![("authorization".to_string(), format!("Bearer {token}"))],
            None => Vec::new(),
        }
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_status(response.status, response.body.clone()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
