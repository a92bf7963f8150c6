#![doc = document_features::document_features!()]
//! Greedy bin packing of weighted items.
//!
//! Two variants are supported:
//! * [constant volume](probs::cvp): pack items into as few bins of a fixed capacity as possible
//! * [constant bin number](probs::cbnp): spread items over a fixed number of bins with balanced weight sums

/// Items, bins and the errors raised while building them
pub mod entities;

/// Turning heterogeneous inputs into items and packed bins back into the input's shape
pub mod source;

/// The packing problem variants
pub mod probs;

/// Exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use entities::{Bin, InvalidInputError, InvalidParameterError, Item, PackError};
#[doc(inline)]
pub use probs::cbnp::{pack_constant_bin_number, to_constant_bin_number};
#[doc(inline)]
pub use probs::cvp::{pack_constant_volume, to_constant_volume};
#[doc(inline)]
pub use source::{ItemSource, Packed, WeightBounds, WeightExtractor};
#[doc(inline)]
pub use util::Backend;
