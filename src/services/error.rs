// ============================================================================
// API ERROR - Taxonomía de fallos de la API
// ============================================================================

use thiserror::Error;

use crate::utils::constants::{
    INVALID_DATA_FORMAT, NETWORK_ERROR_MESSAGE, PRODUCT_NOT_FOUND_REMOVED,
    UNEXPECTED_ERROR_MESSAGE,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 404
    #[error("Resource not found (HTTP 404)")]
    NotFound,

    /// Fallo de transporte (sin conexión, DNS, CORS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Cualquier otro estado no-2xx
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// El cuerpo no tiene la forma esperada
    #[error("{}", INVALID_DATA_FORMAT)]
    InvalidFormat,

    #[error("Parse error: {0}")]
    Parse(String),

    /// Petición abortada (no es un error visible)
    #[error("Request aborted")]
    Aborted,
}

impl ApiError {
    /// Clasifica un estado HTTP no-2xx
    pub fn from_status(status: u16, status_text: &str) -> Self {
        match status {
            404 => ApiError::NotFound,
            _ => ApiError::Http {
                status,
                status_text: status_text.to_string(),
            },
        }
    }

    /// Clasifica un error JS de `fetch` por su nombre
    pub fn from_js_error(name: &str, message: &str) -> Self {
        match name {
            "AbortError" => ApiError::Aborted,
            // fetch rechaza con TypeError cuando no hay respuesta
            "TypeError" | "NetworkError" => ApiError::Network(message.to_string()),
            _ => ApiError::Parse(format!("{}: {}", name, message)),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    /// Mensaje para el usuario en la vista de detalle (404 > red > resto)
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NotFound => PRODUCT_NOT_FOUND_REMOVED,
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE,
            _ => UNEXPECTED_ERROR_MESSAGE,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => ApiError::from_js_error(&js.name, &js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            // GlooError no indica falta de conectividad
            gloo_net::Error::GlooError(msg) => ApiError::Parse(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(404, "Not Found"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "Internal Server Error"),
            ApiError::Http { status: 500, status_text: "Internal Server Error".to_string() }
        );
    }

    #[test]
    fn test_js_error_classification() {
        assert!(ApiError::from_js_error("AbortError", "The user aborted a request.").is_aborted());
        assert_eq!(
            ApiError::from_js_error("TypeError", "Failed to fetch"),
            ApiError::Network("Failed to fetch".to_string())
        );
        assert!(matches!(ApiError::from_js_error("SyntaxError", "bad"), ApiError::Parse(_)));
    }

    #[test]
    fn test_user_messages_in_priority_order() {
        assert_eq!(ApiError::NotFound.user_message(), "Product not found. It may have been removed.");
        assert_eq!(
            ApiError::Network("offline".into()).user_message(),
            "Network error. Please check your connection."
        );
        for err in [
            ApiError::Http { status: 500, status_text: String::new() },
            ApiError::InvalidFormat,
            ApiError::Parse("x".into()),
        ] {
            assert_eq!(err.user_message(), "An unexpected error occurred.");
        }
    }

    #[test]
    fn test_invalid_format_display() {
        assert_eq!(ApiError::InvalidFormat.to_string(), "Invalid data format from API");
    }

    #[test]
    fn test_gloo_error_is_not_a_network_failure() {
        let err = ApiError::from(gloo_net::Error::GlooError("unexpected body".to_string()));
        assert_eq!(err, ApiError::Parse("unexpected body".to_string()));
        assert_eq!(err.user_message(), "An unexpected error occurred.");
    }
}
