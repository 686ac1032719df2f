//! Ready-made label and axis-name types for framery.

#![warn(missing_docs)]
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod label;
mod tag;

pub use label::*;
pub use tag::*;
