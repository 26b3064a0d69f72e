// ============================================================================
// PRODUCT DETAIL - Detalle de un postre (ruta /product/:id)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::image_gallery::ImageGallery;
use crate::config::CONFIG;
use crate::hooks::{use_product_detail, use_viewport};
use crate::models::toggle_label;
use crate::routes::Route;
use crate::utils::constants::{DETAIL_LOADING_TEXT, PRODUCT_NOT_FOUND};
use crate::viewmodels::DetailRender;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductDetailProps {
    pub id: AttrValue,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let detail = use_product_detail(&props.id);
    let viewport = use_viewport();
    let max_chars = CONFIG.ui_config.description_max_chars;
    let vm = &*detail.state;

    let product = match vm.render() {
        DetailRender::Loading => return html! { <p class="loading-text">{DETAIL_LOADING_TEXT}</p> },
        DetailRender::Error(message) => return html! { <p class="error-text">{message}</p> },
        DetailRender::Missing => return html! { <p class="error-text">{PRODUCT_NOT_FOUND}</p> },
        DetailRender::Ready(product) => product,
    };

    let expanded = vm.is_description_expanded();
    let on_toggle = detail.toggle_description.reform(|_: MouseEvent| ());

    html! {
        <div class="product-details">
            <div class="product-layout">
                <div class="product-image-pane">
                    <FallbackImage
                        src={vm.main_image().to_string()}
                        alt={product.image_alt.clone()}
                        class="product-main-image"
                    />
                </div>
                <div class="product-text-pane">
                    <h1 class="product-name">{&product.name}</h1>
                    <p class="product-description">
                        {product.visible_description(expanded, viewport, max_chars)}
                        if product.shows_description_toggle(viewport, max_chars) {
                            <button class="btn-toggle-description" onclick={on_toggle}>
                                {toggle_label(expanded)}
                            </button>
                        }
                    </p>
                    <p class="product-price">{format!("Price: ${}", product.price_label)}</p>
                    <p class="product-category">{format!("Category: {}", product.category)}</p>
                    <Link<Route> to={Route::Menu}>
                        <button class="btn-back">{"Back to Menu"}</button>
                    </Link<Route>>
                </div>
            </div>
            <ImageGallery
                images={product.gallery.clone()}
                on_select={detail.select_image.clone()}
            />
        </div>
    }
}
