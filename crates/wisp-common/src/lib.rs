pub mod ast;
pub mod message;
pub mod types;

pub use driver::{Driver, Mode, Propagation};

mod driver;
