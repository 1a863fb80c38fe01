//! Shared types for the svlang Swedish text tools.
//!
//! - [`character`] -- Character classification and one-to-one case mapping
//! - [`case`] -- Word case pattern detection and re-application
//! - [`segmentation`] -- The value returned by the compound segmenter

pub mod case;
pub mod character;
pub mod segmentation;
