use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageGalleryProps {
    pub images: Vec<String>,
    pub on_select: Callback<String>,
}

/// Miniaturas clicables; click → pasa a ser la imagen principal
#[function_component(ImageGallery)]
pub fn image_gallery(props: &ImageGalleryProps) -> Html {
    if props.images.is_empty() {
        return html! {};
    }

    html! {
        <div class="gallery">
            <div class="gallery-grid">
                { for props.images.iter().enumerate().map(|(index, image)| {
                    let onclick = {
                        let image = image.clone();
                        let cb = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(image.clone()))
                    };
                    html! {
                        <div class="gallery-thumb" key={index} {onclick}>
                            <FallbackImage
                                src={image.clone()}
                                alt={format!("Additional {}", index + 1)}
                                class="gallery-thumb-img"
                            />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
