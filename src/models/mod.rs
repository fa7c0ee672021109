pub mod file;
pub mod wire;

pub use file::*;
pub use wire::*;
