//! Resumable finite-state machine driving the structural decoders.
//!
//! This module is intended for applications feeding bytes themselves (for
//! example, from a network spool). See [`crate::avec`] for implementations
//! covering slices and readers.
//!
//! # Architecture
//!
//! All decoding state between buffers lives in a [`LinkData`] value. It is
//! moved into [`LinkData::resume`] together with the next buffer, and a
//! successor value is returned in the [`Step`], along with the number of
//! bytes consumed. No other state survives between calls.
//!
//! A structure whose bytes are not all present is suspended in one of two
//! ways:
//!
//! - **Backtracking**: fixed-size or terminator-delimited headers (tags,
//! escape sequences, text runs, PJL lines, descriptors, dump rows) are not
//! consumed at all. The caller must offer the unconsumed tail again,
//! followed by the next chunk.
//!
//! - **Payload**: bytes owed to embedded data are consumed as they arrive,
//! and the remaining count is carried in the successor state.
//!
//! Records are emitted once per structure, when it is complete, at the
//! offset of its first byte. Splitting a stream at different boundaries
//! therefore produces identical records.
//!
//! Implementations must:
//!
//! - Prepend unconsumed bytes to the next buffer, and pass the absolute
//! offset of the first byte offered.
//!
//! - Set `end_of_data` only on the final call of a pass, then call
//! [`LinkData::finish`] to report any structure left incomplete.

pub mod anomaly;
mod binary;
mod cursor;
pub mod font;
pub mod link;
mod pcl;
mod pjl;
pub mod segment;
mod xl;

pub use anomaly::Anomaly;
pub use link::{Combined, Dialect, Env, LinkData, PendingKind, Step};

/// Entrypoint to the finite-state machine.
pub type Decoder = link::LinkData;

/// Longest stream header or PJL line held back waiting for its terminator.
pub(crate) const MAX_LINE: usize = 256;
