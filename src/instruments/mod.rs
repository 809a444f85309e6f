//! Instrument definitions held by a book.
//!
//! - [`OptionInstrument`]: European call/put with its own spot, rate, yield, maturity and vol.
//! - [`ForwardInstrument`]: linear exposure to the underlying.

pub mod forward;
pub mod vanilla;

pub use forward::ForwardInstrument;
pub use vanilla::OptionInstrument;
