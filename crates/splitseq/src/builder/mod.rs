#[allow(clippy::module_inception)]
mod builder;
mod built;
mod inline;
mod spined;

pub use builder::*;
pub use built::*;
pub use inline::*;
pub use spined::*;
