use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::utils::constants::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq, Clone)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(false)]
    pub lazy: bool,
}

/// `<img>` que cambia a la imagen placeholder si falla la carga
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            // Solo una vez: si el placeholder también falla no hay bucle
            if needs_fallback(&img.src()) {
                img.set_src(PLACEHOLDER_IMAGE);
            }
        }
    });

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading={props.lazy.then_some("lazy")}
            {onerror}
        />
    }
}

/// `src` del navegador es absoluto, por eso se compara el sufijo
pub fn needs_fallback(current_src: &str) -> bool {
    !current_src.ends_with(PLACEHOLDER_IMAGE)
}
