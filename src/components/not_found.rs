use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <p class="error-text">{"Page not found."}</p>
            <Link<Route> to={Route::Menu}>{"Back to Menu"}</Link<Route>>
        </div>
    }
}
