//! # club-core
//!
//! Core types for clubstats.
//!
//! This crate holds everything that does not touch the network:
//! - [`ClubMember`], one roster entry merged with its per-user sections
//! - Dotted-path flattening of nested JSON and the ordered section merge
//! - The CSV export sink
//! - Error types shared by the above

pub mod errors;
pub mod export;
pub mod flatten;
pub mod member;

pub use errors::{CoreError, ExportError};
pub use export::{column_union, export_csv, write_csv};
pub use flatten::{Collision, FlatRecord, flatten_section, merge_flat};
pub use member::{ClubMember, Section};
