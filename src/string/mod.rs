mod iter;
mod string;

mod tests;

pub use iter::*;
pub use string::*;
