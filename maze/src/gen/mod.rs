pub mod dfs;
pub mod endpoint;

pub use dfs::{Carver, Path, State};
pub use endpoint::{place_entry, place_exit, Axis, Endpoint, Side};
