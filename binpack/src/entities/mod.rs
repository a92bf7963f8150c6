mod bin;
mod error;
mod item;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use error::InvalidInputError;
#[doc(inline)]
pub use error::InvalidParameterError;
#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use item::Item;
