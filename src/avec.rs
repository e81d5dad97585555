//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode whole slices, sequences of chunks and
//! readers, publishing records to a [`RecordSink`]. For bytes arriving over
//! time, feed them to an [`Analysis`] as they come.
//!
//! A sink routing records into struct fields by kind can be derived. See the
//! [`RecordSink`](macro@RecordSink) macro for details.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod stream;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::{decode as decode_slice, decode_chunks};
pub use stream::Analysis;

pub use crate::record::{RecordKind, RecordSink, StructuralRecord};

/// Derive [`RecordSink`] for a struct collecting records by kind.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// To collect every record of some kinds, add the `records(...)` attribute to
/// a `Vec<StructuralRecord>` struct field, listing the [`RecordKind`]
/// variants it receives. To keep only the latest, use an
/// `Option<StructuralRecord>` instead. Records of unlisted kinds are dropped,
/// and each kind may be listed on at most one field.
///
/// The implementation refers to `RecordKind`, `RecordSink` and
/// `StructuralRecord` by name, so these must be in scope.
///
/// ```
/// use prnscope::avec::{RecordKind, RecordSink, StructuralRecord};
///
/// #[derive(Debug, Default, RecordSink)]
/// struct JobOutline {
///     #[records(Pjl)]
///     commands: Vec<StructuralRecord>,
///     #[records(Warning)]
///     warnings: Vec<StructuralRecord>,
///     #[records(StreamHeader)]
///     stream_header: Option<StructuralRecord>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use prnscope_derive::RecordSink;

/// Outcome of a whole pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Bytes in the stream.
    pub length: u64,
    /// Whether the stream ended between structures.
    pub complete: bool,
}
