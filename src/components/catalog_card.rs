use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::models::DessertCard;

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogCardProps {
    pub card: DessertCard,
    pub on_view: Callback<String>, // botón "View Details" → ID
}

#[function_component(CatalogCard)]
pub fn catalog_card(props: &CatalogCardProps) -> Html {
    let card = &props.card;

    let on_view_click = {
        let id = card.id.clone();
        let cb = props.on_view.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    html! {
        <div class="product-card">
            <div class="product-card-image">
                <FallbackImage
                    src={card.image.clone()}
                    alt={card.image_alt.clone()}
                    class="card-img"
                    lazy={true}
                />
            </div>
            <div class="product-card-body">
                <p class="product-card-name">{&card.name}</p>
            </div>
            <div class="product-card-footer">
                <button class="btn-view-details" onclick={on_view_click}>
                    {"View Details"}
                </button>
            </div>
        </div>
    }
}
