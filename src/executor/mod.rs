pub mod driver;
pub mod preflight;
pub mod report;

pub use driver::*;
