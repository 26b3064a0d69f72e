// ============================================================================
// USE CATALOG HOOK - Fetch único del listado al montar
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_api_client::use_api_client;
use crate::routes::Route;
use crate::services::{AttemptGuard, CancellationToken};
use crate::viewmodels::CatalogState;

pub struct UseCatalogHandle {
    pub state: UseStateHandle<CatalogState>,
    /// Navegar al detalle de un postre (por ID)
    pub view_details: Callback<String>,
}

#[hook]
pub fn use_catalog() -> UseCatalogHandle {
    let api = use_api_client();
    let state = use_state(CatalogState::default);
    let navigator = use_navigator();

    // Cargar postres al montar (sin reintentos)
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            // El transporte no se aborta; solo se evita escribir tras desmontar
            let mounted = CancellationToken::new(0);
            let in_flight = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("🍰 [CATALOG] Cargando postres...");
                let result = api.list_desserts().await;
                let committed = in_flight.run_unless_cancelled(|| {
                    state.set(CatalogState::from_result(result));
                });
                if committed.is_none() {
                    log::warn!("⏭️ [CATALOG] Vista desmontada, resultado ignorado");
                }
            });

            let guard = AttemptGuard::new(mounted);
            move || guard.release()
        });
    }

    let view_details = Callback::from(move |id: String| {
        log::info!("➡️ [CATALOG] Ver detalles de {}", id);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::product(id));
        }
    });

    UseCatalogHandle {
        state,
        view_details,
    }
}
