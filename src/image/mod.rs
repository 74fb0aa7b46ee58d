//! Minimal image buffers used by the pipeline.
//!
//! - [`FrameRgb8`]: borrowed view of an interleaved 8-bit RGB frame, the
//!   input type of the detector. Stride is in bytes so callers can hand in
//!   padded rows straight from a decoder.
//! - [`RgbBuffer`]: owned packed RGB buffer (the masked ROI sub-image).
//! - [`ImageU8`] / [`ImageF32`]: owned packed single-channel buffers for
//!   masks, binary images, edge maps, and float-space filtering.
//!
//! All owned buffers are tightly packed (stride == width); only the
//! borrowed frame view carries an explicit stride.

pub mod frame;
pub mod gray;
pub mod io;

pub use frame::{FrameRgb8, RgbBuffer};
pub use gray::{ImageF32, ImageU8};
