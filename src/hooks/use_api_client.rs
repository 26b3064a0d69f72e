use yew::prelude::*;

use crate::services::ApiClient;

/// Cliente HTTP inyectado por contexto; si no hay, el de CONFIG
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
