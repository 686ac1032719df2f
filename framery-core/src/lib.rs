//! Core crate of framery.

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

// layer 1: positional dense containers

pub mod repr;

// layer 2: labeled axes

pub mod axis;

pub mod coordinate;

pub mod dimension;

// selection

pub mod slice;

pub mod selector;

mod resolve;

// labeled sources and views

pub mod labeled;

pub mod view;

// common

pub mod error;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use crate::axis::*;
    pub use crate::coordinate::*;
    pub use crate::dimension::*;
    pub use crate::error::*;
    pub use crate::labeled::*;
    pub use crate::repr::*;
    pub use crate::selector::*;
    pub use crate::slice::*;
    pub use crate::view::*;

    pub use crate::sel;
}
