// ============================================================================
// USE PRODUCT DETAIL HOOK - Fetch del detalle con debounce y cancelación
// ============================================================================
// Por cada ID: token nuevo → Timeout (debounce) → GET con AbortSignal.
// La limpieza (desmontaje o cambio de ID) cancela el token, descarta el
// Timeout y aborta el transporte.
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::AbortController;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_api_client::use_api_client;
use crate::services::{AttemptGuard, CancellationToken};
use crate::viewmodels::{DetailAction, DetailViewModel};

pub struct UseProductDetailHandle {
    pub state: UseReducerHandle<DetailViewModel>,
    pub select_image: Callback<String>,
    pub toggle_description: Callback<()>,
}

#[hook]
pub fn use_product_detail(id: &str) -> UseProductDetailHandle {
    let api = use_api_client();
    let state = use_reducer(DetailViewModel::default);
    let attempts = use_mut_ref(|| 0u64);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(id.to_string(), move |id| {
            let attempt = {
                let mut counter = attempts.borrow_mut();
                *counter += 1;
                *counter
            };
            let token = CancellationToken::new(attempt);
            dispatcher.dispatch(DetailAction::Begin(token.clone()));

            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            let debounce_ms = CONFIG.fetch_config.debounce_ms;
            log::info!("⏳ [DETAIL] Intento {} para {} en {}ms", attempt, id, debounce_ms);

            let timeout = {
                let id = id.clone();
                let in_flight = token.clone();
                Timeout::new(debounce_ms, move || {
                    in_flight.clone().run_unless_cancelled(move || {
                        wasm_bindgen_futures::spawn_local(async move {
                            log::info!("🔍 [DETAIL] Obteniendo producto {}", id);
                            let result = api.get_dessert(&id, signal.as_ref()).await;
                            let attempt = in_flight.attempt();
                            let committed = in_flight.clone().run_unless_cancelled(|| {
                                dispatcher.dispatch(DetailAction::Resolve {
                                    token: in_flight,
                                    result,
                                })
                            });
                            if committed.is_none() {
                                log::warn!("🚫 [DETAIL] Intento {} cancelado, resultado descartado", attempt);
                            }
                        });
                    });
                })
            };

            let mut guard = AttemptGuard::new(token).with_timer(timeout);
            if let Some(controller) = controller {
                guard = guard.with_abort(move || controller.abort());
            }
            move || guard.release()
        });
    }

    let select_image = {
        let dispatcher = state.dispatcher();
        Callback::from(move |url: String| dispatcher.dispatch(DetailAction::SelectImage(url)))
    };

    let toggle_description = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DetailAction::ToggleDescription))
    };

    UseProductDetailHandle {
        state,
        select_image,
        toggle_description,
    }
}
