#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! perceptual-color: the color math behind accessible theme derivation
//!
//! Everything in this crate is a pure function or a `Copy` value type. There
//! is no global state, so results depend only on inputs.
//!
//! # Quick Start
//!
//! ```
//! use perceptual_color::{distance, is_light, meets_contrast, Lab, Polarity, Srgb};
//!
//! let background: Srgb = "#f2e6c9".parse().unwrap();
//! assert!(is_light(background));
//!
//! // Darken a candidate in CIELAB until it reads against the background.
//! let mut lab = Lab::from(Srgb::from_u8(0xc0, 0x8a, 0x3e));
//! let text = loop {
//!     let candidate = Srgb::from(lab).quantize();
//!     if meets_contrast(candidate, background, 75.0, Polarity::DarkOnLight) {
//!         break candidate;
//!     }
//!     lab = lab.darken(1.0);
//! };
//! assert!(distance(text, background) > 15.0);
//! ```
//!
//! # Which metric answers which question
//!
//! | Question | Function | Space |
//! |----------|----------|-------|
//! | Black or white text? | [`is_light`] | Rec. 601 luma on bytes |
//! | Is this text readable? | [`meets_contrast`] / [`apca_contrast`] | APCA screen luminance |
//! | Are these two colors the same to a reader? | [`distance`] / [`ciede2000`] | CIELAB |
//! | Make it lighter or darker | [`Lab::lighten`] / [`Lab::darken`] | CIELAB |
//!
//! The light/dark split uses a cheap luma rather than APCA: it
//! only picks the end of the scale, and must be stable for colors near the
//! middle.

pub mod color;
pub mod contrast;
pub mod difference;
pub mod error;
pub mod luminance;

pub use color::{Lab, LinearRgb, Srgb, MAX_LIGHTNESS, MIN_LIGHTNESS};
pub use contrast::{apca_contrast, meets_contrast, Polarity};
pub use difference::{ciede2000, distance};
pub use error::ParseColorError;
pub use luminance::{is_light, weighted_luminance, LIGHT_THRESHOLD};
