mod iter;
mod normalize;
mod path;


pub use iter::*;
pub use path::*;
