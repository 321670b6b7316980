mod interpreter;
mod memory;

pub use interpreter::*;
pub use memory::*;
