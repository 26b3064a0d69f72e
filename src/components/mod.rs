pub mod app;
pub mod catalog_card;
pub mod catalog_view;
pub mod fallback_image;
pub mod image_gallery;
pub mod not_found;
pub mod product_detail;

pub use app::App;
pub use catalog_view::CatalogView;
pub use not_found::NotFound;
pub use product_detail::ProductDetail;
