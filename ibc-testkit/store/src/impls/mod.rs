pub(crate) mod in_memory;
pub(crate) mod overlay;

pub use in_memory::InMemoryStore;
pub use overlay::OverlayStore;
