//! Type-safe API client for the backend REST API
//!
//! Wraps a `reqwest::Client`. Query traffic (`fetch_route`, existence
//! probes) never surfaces errors: transport failures, non-success
//! statuses and empty pages all collapse into `PageOutcome::NotFound`,
//! which is exactly how the rest of the dashboard treats them. Mutations
//! (`create_*`, `update_*`, `delete_*`) return a [`ClientError`] so the
//! caller can show a meaningful toast.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use tablero_core::{EntityKind, Precision, SearchField};
use tablero_model::{
    Client as ClientRecord, CreateClient, CreateImage, CreateRole, CreateTax, CreateUser,
    ImageRecord, Message, PageOutcome, PageResult, Role, SendMessage, Tax, UpdateClient,
    UpdateImage, UpdateRole, UpdateTax, UpdateUser, User,
};
use tablero_query::{QueryRequest, QueryRoute};

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "TABLERO_API_URL";

/// Default backend base URL for development
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

// ============================================================================
// Error Type
// ============================================================================

/// Errors surfaced by mutation requests
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body, if any
        message: String,
    },

    /// Failed to deserialise the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether this is a "conflict" (409) error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status: 409, .. })
    }

    /// Whether this is a "not found" (404) error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Get the user-facing error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => {
                if e.is_timeout() {
                    "La solicitud expiró. Intente nuevamente.".to_string()
                } else if e.is_connect() {
                    "No se pudo conectar con el servidor.".to_string()
                } else {
                    "Ocurrió un error de red inesperado.".to_string()
                }
            }
            Self::Api { message, .. } => message.clone(),
            Self::Parse(_) => "El servidor devolvió una respuesta inesperada.".to_string(),
        }
    }
}

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the backend REST API
///
/// # Example
///
/// ```rust,ignore
/// let client = ApiClient::new();
/// let tax = client.create_tax(&payload).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client
    client: Client,
    /// Base URL of the backend API (e.g. `http://127.0.0.1:8080`)
    base_url: String,
    /// Optional bearer token for authenticated requests
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// The base URL comes from the `TABLERO_API_URL` environment variable,
    /// falling back to `http://127.0.0.1:8080`.
    pub fn new() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url,
            token: None,
        }
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the full URL for an API endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Success as the backend defines it: status at or below 300
    fn is_success(status: u16) -> bool {
        status <= 300
    }

    // ========================================================================
    // Query traffic - everything collapses into PageOutcome
    // ========================================================================

    /// Execute a planned query against the entity's endpoints
    ///
    /// `ListAll` plans hit `GET /api/<entity>?page&size`; search plans hit
    /// `GET /api/<entity>/busqueda?exactitud=..&<field>=<value>&page&size`,
    /// where field and precision were already resolved by the entity's
    /// decision table.
    pub async fn fetch_route<F, T>(
        &self,
        entity: EntityKind,
        request: &QueryRequest<F>,
    ) -> PageOutcome<T>
    where
        F: SearchField,
        T: DeserializeOwned,
    {
        let page = request.page.to_string();
        let size = request.page_size.to_string();

        match &request.route {
            QueryRoute::ListAll => {
                let path = format!("/api/{}", entity.api_path());
                self.fetch_page(&path, &[("page", page.as_str()), ("size", size.as_str())])
                    .await
            }
            QueryRoute::Search {
                field,
                value,
                precision,
            } => {
                let path = format!("/api/{}/busqueda", entity.api_path());
                self.fetch_page(
                    &path,
                    &[
                        ("exactitud", precision.as_query()),
                        (field.query_key(), value.as_str()),
                        ("page", page.as_str()),
                        ("size", size.as_str()),
                    ],
                )
                .await
            }
        }
    }

    /// Fetch one page, folding every failure into `NotFound`
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> PageOutcome<T> {
        let mut req = self.client.get(self.url(path)).query(query);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(path, error = %e, "page fetch failed in transit");
                return PageOutcome::NotFound;
            }
        };

        let status = response.status().as_u16();
        if !Self::is_success(status) {
            tracing::warn!(path, status, "page fetch answered non-success");
            return PageOutcome::NotFound;
        }

        match response.json::<PageResult<T>>().await {
            Ok(page) => PageOutcome::from_page(page),
            Err(e) => {
                tracing::warn!(path, error = %e, "page fetch body did not parse");
                PageOutcome::NotFound
            }
        }
    }

    /// Probe whether an exact match for `key=value` exists on the entity
    ///
    /// Used by the debounced uniqueness validator. A non-success status
    /// reads as "no hit"; only transport errors propagate.
    async fn probe(
        &self,
        entity: EntityKind,
        key: &str,
        value: &str,
    ) -> Result<bool, ClientError> {
        let path = format!("/api/{}/busqueda", entity.api_path());
        let mut req = self.client.get(self.url(&path)).query(&[
            ("exactitud", Precision::Exact.as_query()),
            (key, value),
            ("page", "1"),
            ("size", "1"),
        ]);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        if !Self::is_success(response.status().as_u16()) {
            return Ok(false);
        }

        let page = response
            .json::<PageResult<Value>>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(!page.is_empty())
    }

    // ========================================================================
    // Generic mutation helpers
    // ========================================================================

    /// Send a POST request with a JSON body and deserialise the response
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        self.handle_response(response).await
    }

    /// Send a PATCH request with a JSON body and deserialise the response
    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let mut req = self.client.patch(self.url(path)).json(body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        self.handle_response(response).await
    }

    /// Send a DELETE request. Returns `Ok(())` on success
    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let mut req = self.client.delete(self.url(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        if Self::is_success(status) {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// Handle a response: check the status and deserialise on success
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status().as_u16();

        if Self::is_success(status) {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// Build an `Api` error, keeping whatever message the body carried
    async fn status_error(status: u16, response: reqwest::Response) -> ClientError {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("El servidor respondió con estado {status}"));
        ClientError::Api { status, message }
    }

    // ========================================================================
    // Client endpoints
    // ========================================================================

    /// Create a new client.
    ///
    /// POST /api/clientes/
    pub async fn create_client(&self, payload: &CreateClient) -> Result<ClientRecord, ClientError> {
        self.post("/api/clientes/", payload).await
    }

    /// Update an existing client by ID.
    ///
    /// PATCH /api/clientes/:id
    pub async fn update_client(
        &self,
        id: Uuid,
        payload: &UpdateClient,
    ) -> Result<ClientRecord, ClientError> {
        self.patch(&format!("/api/clientes/{id}"), payload).await
    }

    /// Delete a client by ID.
    ///
    /// DELETE /api/clientes/:id
    pub async fn delete_client(&self, id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("/api/clientes/{id}")).await
    }

    // ========================================================================
    // User endpoints
    // ========================================================================

    /// Create a new user account.
    ///
    /// POST /api/usuarios/
    pub async fn create_user(&self, payload: &CreateUser) -> Result<User, ClientError> {
        self.post("/api/usuarios/", payload).await
    }

    /// Update an existing user by ID.
    ///
    /// PATCH /api/usuarios/:id
    pub async fn update_user(&self, id: Uuid, payload: &UpdateUser) -> Result<User, ClientError> {
        self.patch(&format!("/api/usuarios/{id}"), payload).await
    }

    /// Delete a user by ID.
    ///
    /// DELETE /api/usuarios/:id
    pub async fn delete_user(&self, id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("/api/usuarios/{id}")).await
    }

    /// Whether a login name is already registered
    pub async fn username_exists(&self, username: &str) -> Result<bool, ClientError> {
        self.probe(EntityKind::User, "nombre_usuario", username).await
    }

    // ========================================================================
    // Role endpoints
    // ========================================================================

    /// Create a new role.
    ///
    /// POST /api/roles/
    pub async fn create_role(&self, payload: &CreateRole) -> Result<Role, ClientError> {
        self.post("/api/roles/", payload).await
    }

    /// Update an existing role by ID.
    ///
    /// PATCH /api/roles/:id
    pub async fn update_role(&self, id: Uuid, payload: &UpdateRole) -> Result<Role, ClientError> {
        self.patch(&format!("/api/roles/{id}"), payload).await
    }

    /// Delete a role by ID.
    ///
    /// DELETE /api/roles/:id
    pub async fn delete_role(&self, id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("/api/roles/{id}")).await
    }

    /// Whether a role name is already registered
    pub async fn role_name_exists(&self, name: &str) -> Result<bool, ClientError> {
        self.probe(EntityKind::Role, "nombre", name).await
    }

    // ========================================================================
    // Tax endpoints
    // ========================================================================

    /// Create a new tax.
    ///
    /// POST /api/impuestos/
    pub async fn create_tax(&self, payload: &CreateTax) -> Result<Tax, ClientError> {
        self.post("/api/impuestos/", payload).await
    }

    /// Update an existing tax by ID.
    ///
    /// PATCH /api/impuestos/:id
    pub async fn update_tax(&self, id: Uuid, payload: &UpdateTax) -> Result<Tax, ClientError> {
        self.patch(&format!("/api/impuestos/{id}"), payload).await
    }

    /// Delete a tax by ID.
    ///
    /// DELETE /api/impuestos/:id
    pub async fn delete_tax(&self, id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("/api/impuestos/{id}")).await
    }

    /// Whether a tax code is already registered
    pub async fn tax_code_exists(&self, code: &str) -> Result<bool, ClientError> {
        self.probe(EntityKind::Tax, "codigo", code).await
    }

    // ========================================================================
    // Image endpoints
    // ========================================================================

    /// Register a new image.
    ///
    /// POST /api/imagenes/
    pub async fn create_image(&self, payload: &CreateImage) -> Result<ImageRecord, ClientError> {
        self.post("/api/imagenes/", payload).await
    }

    /// Update an existing image by ID.
    ///
    /// PATCH /api/imagenes/:id
    pub async fn update_image(
        &self,
        id: Uuid,
        payload: &UpdateImage,
    ) -> Result<ImageRecord, ClientError> {
        self.patch(&format!("/api/imagenes/{id}"), payload).await
    }

    /// Delete an image by ID.
    ///
    /// DELETE /api/imagenes/:id
    pub async fn delete_image(&self, id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("/api/imagenes/{id}")).await
    }

    // ========================================================================
    // Message endpoints
    // ========================================================================

    /// Send a new message.
    ///
    /// POST /api/mensajes/
    pub async fn send_message(&self, payload: &SendMessage) -> Result<Message, ClientError> {
        self.post("/api/mensajes/", payload).await
    }

    /// Delete a message by ID.
    ///
    /// DELETE /api/mensajes/:id
    pub async fn delete_message(&self, id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("/api/mensajes/{id}")).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tablero_query::QueryController;

    #[test]
    fn test_base_url_override() {
        let client = ApiClient::new().with_base_url("http://backend:9000");
        assert_eq!(client.url("/api/clientes"), "http://backend:9000/api/clientes");
    }

    #[test]
    fn test_success_cutoff_is_300() {
        assert!(ApiClient::is_success(200));
        assert!(ApiClient::is_success(300));
        assert!(!ApiClient::is_success(301));
        assert!(!ApiClient::is_success(404));
        assert!(!ApiClient::is_success(500));
    }

    #[tokio::test]
    async fn test_unreachable_backend_collapses_to_not_found() {
        // Nothing listens here; the transport failure must fold into the
        // same NotFound the user sees for an empty page
        let client = ApiClient::new().with_base_url("http://127.0.0.1:1");
        let mut ctl: QueryController<tablero_model::ClientField> = QueryController::new(8);
        let request = ctl.plan();

        let outcome: PageOutcome<ClientRecord> =
            client.fetch_route(EntityKind::Client, &request).await;
        assert!(outcome.is_not_found());
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_mutations_loudly() {
        let client = ApiClient::new().with_base_url("http://127.0.0.1:1");
        let payload = CreateTax {
            codigo: "IVA21".to_string(),
            nombre: "IVA general".to_string(),
            porcentaje: 21.0,
        };
        let result = client.create_tax(&payload).await;
        assert!(matches!(result, Err(ClientError::Request(_))));
    }

    #[test]
    fn test_user_messages_are_actionable() {
        let err = ClientError::Api {
            status: 409,
            message: "Este código ya está registrado".to_string(),
        };
        assert!(err.is_conflict());
        assert_eq!(err.user_message(), "Este código ya está registrado");
    }
}
