pub mod catalog_viewmodel;
pub mod detail_viewmodel;

pub use catalog_viewmodel::CatalogState;
pub use detail_viewmodel::{DetailAction, DetailRender, DetailViewModel};
