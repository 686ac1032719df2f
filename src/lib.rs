//! Labeled axes and label-based views over dense multidimensional arrays.
//!
//! ```
//! use framery::prelude::*;
//!
//! let temps = NdLabeledArray::from_array(
//!     ndarray::array![[11.0, 24.0, 18.0], [12.5, 25.0, 17.0]].into_dyn(),
//!     [
//!         (Tag::from("time"), label_axis([2020, 2021]).unwrap()),
//!         (Tag::from("location"), label_axis(["paris", "tokyo", "lima"]).unwrap()),
//!     ],
//! )
//! .unwrap();
//!
//! let tokyo = temps
//!     .view(&sel!["location".into() => AxisSlice::squeeze("tokyo".into())])
//!     .unwrap();
//! assert_eq!(tokyo.dimension_labels(), &[Tag::from("time")]);
//! assert_eq!(
//!     *tokyo.select(&sel!["time".into() => AxisSlice::squeeze(2021.into())]).unwrap(),
//!     25.0
//! );
//! ```

/// core traits and structs: dense containers, labeled axes, selectors, labeled arrays and views
pub mod core {
    pub use framery_core::*;
}

/// ready-made label and axis-name types
pub mod basic {
    pub use framery_basic::*;
}

/// labeled arrays stored in ndarray
#[cfg(feature = "ndarray")]
pub mod nd_dense {
    pub use framery_ndarray::*;
}

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use framery_basic::*;
    pub use framery_core::prelude::*;
    #[cfg(feature = "ndarray")]
    pub use framery_ndarray::{NdLabeledArray, NdLabeledArrayExt};
}
