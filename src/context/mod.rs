pub mod viewport;

pub use viewport::ViewportProvider;
