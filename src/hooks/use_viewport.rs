use yew::prelude::*;

use crate::models::Viewport;

/// Viewport publicado por `ViewportProvider` (o el de escritorio si no hay provider)
#[hook]
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_default()
}
