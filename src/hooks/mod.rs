pub mod use_api_client;
pub mod use_catalog;
pub mod use_product_detail;
pub mod use_viewport;

pub use use_catalog::use_catalog;
pub use use_product_detail::use_product_detail;
pub use use_viewport::use_viewport;
