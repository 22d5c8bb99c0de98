#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "alloc")]
mod builder;
mod characteristics;
#[cfg(feature = "alloc")]
mod close;
mod concat;
mod error;
#[cfg(feature = "rayon")]
mod par;
mod range;
mod sequence;

#[cfg(feature = "alloc")]
pub use crate::builder::*;
pub use crate::characteristics::*;
#[cfg(feature = "alloc")]
pub use crate::close::*;
pub use crate::concat::*;
pub use crate::error::*;
#[cfg(feature = "rayon")]
pub use crate::par::*;
pub use crate::range::*;
pub use crate::sequence::*;
