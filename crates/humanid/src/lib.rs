#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod base32;
mod codec;
mod error;
mod id;
mod legacy;
mod raw;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::legacy::*;
pub use crate::raw::*;
