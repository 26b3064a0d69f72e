// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene estado de UI: hace el request, valida la forma del cuerpo y
// devuelve modelos o un ApiError clasificado
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::AbortSignal;

use crate::config::CONFIG;
use crate::models::{DessertDetail, DessertListResponse, DessertSummary};
use crate::services::error::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}/api/dessert/list", self.base_url)
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}/api/dessert/{}", self.base_url, id)
    }

    /// Listar postres (catálogo)
    pub async fn list_desserts(&self) -> Result<Vec<DessertSummary>, ApiError> {
        let url = self.list_url();
        log::info!("🍰 [API] GET {}", url);

        let response = Request::get(&url).send().await?;
        let body = ensure_success(response).await?.json::<serde_json::Value>().await?;
        parse_dessert_list(body)
    }

    /// Obtener un postre por ID; `signal` permite abortar el transporte
    pub async fn get_dessert(
        &self,
        id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<DessertDetail, ApiError> {
        let url = self.detail_url(id);
        log::info!("🔍 [API] GET {}", url);

        let response = Request::get(&url).abort_signal(signal).send().await?;
        let body = ensure_success(response).await?.json::<serde_json::Value>().await?;
        parse_dessert_detail(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        log::warn!("⚠️ [API] HTTP {} {}", response.status(), response.status_text());
        Err(ApiError::from_status(response.status(), &response.status_text()))
    }
}

/// `{ data: [...] }` → lista; `data` que no sea lista → InvalidFormat
pub fn parse_dessert_list(body: serde_json::Value) -> Result<Vec<DessertSummary>, ApiError> {
    let envelope: DessertListResponse =
        serde_json::from_value(body).map_err(|_| ApiError::InvalidFormat)?;
    if !envelope.data.is_array() {
        return Err(ApiError::InvalidFormat);
    }
    Ok(serde_json::from_value(envelope.data)?)
}

/// El detalle debe ser un objeto JSON
pub fn parse_dessert_detail(body: serde_json::Value) -> Result<DessertDetail, ApiError> {
    if !body.is_object() {
        return Err(ApiError::InvalidFormat);
    }
    Ok(serde_json::from_value(body)?)
}
