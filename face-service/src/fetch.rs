// Module declarations for reference-image retrieval
pub mod client;
pub mod mock;
pub mod traits;

// Re-exports for convenience
pub use client::HttpImageFetcher;
pub use mock::MockImageFetcher;
pub use traits::ImageFetcher;
