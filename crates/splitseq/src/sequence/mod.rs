mod empty;
mod interface;
mod iter;

pub use empty::*;
pub use interface::*;
pub use iter::*;
