#[allow(clippy::module_inception)]
mod concat;
#[cfg(test)]
mod tests;

pub use concat::*;
