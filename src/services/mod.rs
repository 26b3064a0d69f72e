pub mod api_client;
pub mod cancellation;
pub mod error;

pub use api_client::ApiClient;
pub use cancellation::{AttemptGuard, CancellationToken};
pub use error::ApiError;
