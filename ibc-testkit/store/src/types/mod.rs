pub mod height;
pub mod path;
pub mod store;

pub use height::{Height, RawHeight};
pub use path::Path;
pub use store::{BinStore, JsonStore, State, TypedStore};
