pub mod entry;
pub mod loader;

pub use entry::*;
pub use loader::*;
