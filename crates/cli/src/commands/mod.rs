//! CLI command implementations.

mod build;
mod export;
mod list;
mod pack;

pub use build::build;
pub use export::{css, manifest};
pub use list::list;
pub use pack::pack;
