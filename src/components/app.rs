// ============================================================================
// APP - Raíz: providers (API, viewport) + router
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::{CatalogView, NotFound, ProductDetail};
use crate::context::ViewportProvider;
use crate::routes::Route;
use crate::services::ApiClient;

#[function_component(App)]
pub fn app() -> Html {
    let api = use_memo((), |_| ApiClient::new());

    html! {
        <ContextProvider<ApiClient> context={(*api).clone()}>
            <ViewportProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ViewportProvider>
        </ContextProvider<ApiClient>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Menu} /> },
        Route::Menu => html! { <CatalogView /> },
        // Mismo componente entre IDs: el hook ve el cambio y cancela el intento previo
        Route::Product { id } => html! { <ProductDetail id={id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
