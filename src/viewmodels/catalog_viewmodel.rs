// ============================================================================
// CATALOG VIEWMODEL - Estado del listado de postres
// ============================================================================

use crate::models::{DessertCard, DessertSummary};
use crate::services::ApiError;
use crate::utils::constants::CATALOG_FETCH_ERROR;

/// Exactamente un modo de render activo: cargando, error o datos
#[derive(Clone, PartialEq, Debug, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<DessertCard>),
}

impl CatalogState {
    /// Convierte el resultado del fetch; cualquier fallo da el mensaje fijo
    pub fn from_result(result: Result<Vec<DessertSummary>, ApiError>) -> Self {
        match result {
            Ok(items) => {
                log::info!("✅ [CATALOG] {} postres recibidos", items.len());
                CatalogState::Loaded(items.into_iter().map(DessertCard::from).collect())
            }
            Err(e) => {
                log::error!("❌ [CATALOG] Error obteniendo postres: {}", e);
                CatalogState::Failed(CATALOG_FETCH_ERROR.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn cards(&self) -> &[DessertCard] {
        match self {
            CatalogState::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::parse_dessert_list;
    use crate::utils::constants::PLACEHOLDER_IMAGE;
    use serde_json::json;

    #[test]
    fn test_one_card_per_item_in_order() {
        let result = parse_dessert_list(json!({
            "data": [
                { "_id": "b", "name": "Brownie", "mainImage": "brownie.png" },
                { "_id": "a" }
            ]
        }));
        let state = CatalogState::from_result(result);
        let cards = state.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "b");
        assert_eq!(cards[0].name, "Brownie");
        assert_eq!(cards[1].id, "a");
        assert_eq!(cards[1].name, "Unnamed Cake");
        assert_eq!(cards[1].image, PLACEHOLDER_IMAGE);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_invalid_format_shows_fixed_error_and_no_cards() {
        let state = CatalogState::from_result(parse_dessert_list(json!({ "data": {} })));
        assert_eq!(state.error(), Some("Failed to fetch cakes. Please try again later."));
        assert!(state.cards().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_transport_and_status_failures_share_message() {
        for err in [ApiError::Network("offline".into()), ApiError::NotFound] {
            let state = CatalogState::from_result(Err(err));
            assert_eq!(state.error(), Some(CATALOG_FETCH_ERROR));
        }
    }

    #[test]
    fn test_empty_list_is_loaded_not_loading() {
        let state = CatalogState::from_result(Ok(vec![]));
        assert_eq!(state, CatalogState::Loaded(vec![]));
        assert!(!state.is_loading());
        assert!(CatalogState::default().is_loading());
    }
}
