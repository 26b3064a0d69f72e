// ============================================================================
// VIEWPORT CONTEXT - Ancho del viewport reactivo e inyectable
// ============================================================================
// El provider escucha "resize" en window y publica un `Viewport` por
// contexto; los componentes nunca leen window.innerWidth directamente
// ============================================================================

use gloo_events::EventListener;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Viewport;

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y publica el ancho actual
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let narrow_below = CONFIG.ui_config.narrow_viewport_width;
    let viewport = use_state_eq(|| Viewport::new(current_width(), narrow_below));

    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_event| {
                    viewport.set(Viewport::new(current_width(), narrow_below));
                })
            });
            log::info!("📐 [VIEWPORT] Listener de resize registrado");
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<Viewport> context={*viewport}>
            {props.children.clone()}
        </ContextProvider<Viewport>>
    }
}

/// Ancho actual de window (o el valor por defecto fuera del navegador)
pub fn current_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(Viewport::default().width)
}
