#![no_std]

//! A resumable structural analyser for printer job streams.
//!
//! Prnscope classifies every byte of a job (PJL commands, PCL 5 escape
//! sequences and text, and PCL XL tags, including downloaded soft-font
//! headers) into a flat list of records, each located by its offset. Streams
//! may be supplied in chunks of any size: the records produced do not depend
//! on where a stream is split.
//!
//! Most users should begin with the functions and derive macro in the
//! [`avec`] module. If these prove insufficient (for example, when bytes
//! arrive from a network spool), consider driving the finite-state machine
//! described in the [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod record;
pub mod sans;
pub mod stats;
pub mod tables;
