use yew_router::prelude::*;

/// Tabla de rutas de la tienda
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    /// Listado (catálogo)
    #[at("/Menu")]
    Menu,
    /// Detalle de un postre
    #[at("/product/:id")]
    Product { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn product(id: impl Into<String>) -> Self {
        Route::Product { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Menu.to_path(), "/Menu");
        assert_eq!(Route::product("64f1a2").to_path(), "/product/64f1a2");
    }

    #[test]
    fn test_recognize_detail_route() {
        assert_eq!(Route::recognize("/product/abc"), Some(Route::product("abc")));
        assert_eq!(Route::recognize("/Menu"), Some(Route::Menu));
    }
}
