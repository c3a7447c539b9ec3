// Module declarations for the recognition backend
pub mod backend;
pub mod embedding;
pub mod loader;
pub mod matcher;

pub use backend::{FaceBackend, PlaceholderBackend};
pub use loader::load_backend;
