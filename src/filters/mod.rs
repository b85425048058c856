//! # Video Filters
//!
//! Filters are attached by the host to an upstream source and draw its frame
//! through an effect program. Each filter type registers a
//! [`SourceInfo`](crate::host::SourceInfo) descriptor and implements
//! [`VideoFilter`] for its instances.
//!
//! ## Built-in Filters
//!
//! - **ASCII**: Character-cell quantization with glyph and color selection,
//!   optional dithering and background color computation

pub mod ascii;
pub mod traits;

pub use traits::VideoFilter;

pub use ascii::AsciiFilter;
