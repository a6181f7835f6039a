//! Versecard - presentation values for lyric cards
//!
//! Derives accessible color themes from image swatches, picks the largest
//! display scale that fits a height budget, and marks a highlighted passage
//! line by line.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
