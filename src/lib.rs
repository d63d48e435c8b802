//! aomerge - Merge Advanced Output lighting exports and plan DMX channels
//!
//! aomerge ingests Advanced Output XML exports (each describing named
//! screens built from addressable pixel fixtures), merges their screens
//! with first-occurrence-wins deduplication, lets the operator pick a
//! subset, assigns contiguous DMX channel ranges, and renders one combined
//! document from a template. A secondary mode extracts fixture pixel
//! centers to CSV.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Capacity model, channel allocator, selection parser, centroid helper
//! - [`doc`] - XML codec for Advanced Output documents
//! - [`repository`] - Document loading and screen deduplication
//! - [`template`] - Placeholder substitution and guarded output writing
//! - [`csv`] - Per-screen pixel-center export
//! - [`ui`] - Prompts and console output
//!
//! # Invariants
//!
//! 1. Deduplication is first-occurrence-wins over strictly sequential file
//!    processing in sorted filename order
//! 2. Selection results are always ordered by screen index, never by the
//!    order tokens were typed
//! 3. Default channel suggestions never overlap; operator-typed values are
//!    accepted verbatim and may overlap
//! 4. An existing output file is never overwritten

pub mod cli;
pub mod core;
pub mod csv;
pub mod doc;
pub mod repository;
pub mod template;
pub mod ui;
