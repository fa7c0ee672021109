pub mod backend;
pub mod naming;

pub use backend::*;
pub use naming::*;
