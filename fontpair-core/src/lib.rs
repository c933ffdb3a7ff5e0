//! fontpair-core: a well-read matchmaker for book typography
//!
//! Like a bookshop owner who always knows which typeface suits which shelf,
//! this library keeps a small, hand-picked catalog of fonts and the pairings
//! that flatter each literary genre. Everything is compiled in, nothing is
//! fetched, and every run tells exactly the same story.
//!
//! ## Three Chapters
//!
//! **Taxonomy**: the curated shelves
//! - Five typographic roles, ten fonts each, in curation order
//! - Eight genres, each with three ranked body/heading pairings
//! - Validation that refuses an empty shelf before anything is written
//!
//! **Classification**: judging a font by its name
//! - Monospace keywords first, serif keywords second, sans-serif otherwise
//! - Slab families keep their sans-serif verdict, quirks and all
//!
//! **Assembly**: binding the volume
//! - Collects every distinct curated name and classifies it once
//! - Produces one versioned [`database::FontDatabase`] ready for JSON
//!
//! ## A Short Reading
//!
//! ```rust
//! use fontpair_core::classify::{classify, FontCategory};
//! use fontpair_core::database::FontDatabase;
//!
//! let db = FontDatabase::builtin()?;
//! assert_eq!(db.summary().genres, 8);
//!
//! let first = &db.pairings_for("mystery")[0];
//! assert_eq!(first.heading, "Playfair Display");
//! assert_eq!(classify(&first.body), FontCategory::Serif);
//! #
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod classify;
pub mod database;
pub mod output;
pub mod taxonomy;
