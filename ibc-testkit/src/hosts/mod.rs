pub mod mock;

pub use mock::{MockBlock, MockHost};
