pub mod core_ctx;
pub mod overlay;
pub mod types;
