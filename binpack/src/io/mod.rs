mod export;

/// External (serializable) representations of packing solutions.
pub mod ext_repr;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_bin;
