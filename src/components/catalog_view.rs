// ============================================================================
// CATALOG VIEW - Listado de postres (ruta /Menu)
// ============================================================================

use yew::prelude::*;

use crate::components::catalog_card::CatalogCard;
use crate::hooks::use_catalog;
use crate::utils::constants::CATALOG_LOADING_TEXT;

#[function_component(CatalogView)]
pub fn catalog_view() -> Html {
    let catalog = use_catalog();

    let state = &*catalog.state;

    if state.is_loading() {
        return html! { <p class="loading-text">{CATALOG_LOADING_TEXT}</p> };
    }
    if let Some(message) = state.error() {
        return html! { <p class="error-text">{message}</p> };
    }

    html! {
        <div class="catalog-page">
            <div class="catalog-container">
                <h1 class="catalog-title">{"Our Creations"}</h1>
                <div class="catalog-grid">
                    { for state.cards().iter().map(|card| html! {
                        <CatalogCard
                            key={card.id.clone()}
                            card={card.clone()}
                            on_view={catalog.view_details.clone()}
                        />
                    })}
                </div>
            </div>
        </div>
    }
}
