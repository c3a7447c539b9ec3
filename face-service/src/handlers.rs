// Module declarations for HTTP handlers
pub mod compare;
pub mod detect;
pub mod health;
pub mod not_found;
pub mod root;

// Re-exports
pub use compare::compare_handler;
pub use detect::detect_handler;
pub use health::health_handler;
pub use not_found::not_found_handler;
pub use root::root_handler;
