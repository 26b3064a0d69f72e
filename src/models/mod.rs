pub mod dessert;
pub mod view;
pub mod viewport;

pub use dessert::{DessertDetail, DessertListResponse, DessertSummary};
pub use view::{toggle_label, DessertCard, ProductView};
pub use viewport::Viewport;
