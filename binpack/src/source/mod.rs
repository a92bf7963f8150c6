mod bounds;
mod item_source;
mod normalized;
mod record;

#[doc(inline)]
pub use bounds::WeightBounds;
#[doc(inline)]
pub use item_source::ItemSource;
#[doc(inline)]
pub use item_source::WeightExtractor;
#[doc(inline)]
pub use normalized::Normalized;
#[doc(inline)]
pub use normalized::Packed;
#[doc(inline)]
pub use record::FieldError;
#[doc(inline)]
pub use record::Record;
