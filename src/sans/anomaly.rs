//! Anomalies reported as warning records.
//!
//! None of these abort a pass. Each is recorded once, and the affected bytes
//! are decoded as opaque binary data or skipped.

use alloc::string::String;

use thiserror::Error;

use super::link::PendingKind;

/// A structural anomaly found while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Anomaly {
    /// A reserved PCL XL tag.
    #[error("Unknown tag 0x{0:02X}.")]
    UnknownTag(u8),
    /// A stream header selecting the ASCII binding.
    #[error("ASCII stream binding is not supported.")]
    AsciiBinding,
    /// A stream header or PJL line without a terminator.
    #[error("Line exceeds {0} bytes.")]
    LongLine(usize),
    /// An array whose length has a non-integral type.
    #[error("Array length has type tag 0x{0:02X}.")]
    ArrayLength(u8),
    /// A soft-font header in a format other than 0.
    #[error("Unrecognised font header format {0}.")]
    FontFormat(u8),
    /// A font header block too short to hold a descriptor.
    #[error(
        "Font header block of {0} bytes is shorter than its descriptor."
    )]
    ShortDescriptor(u64),
    /// An unrecognised font header segment type.
    #[error("Unrecognised font segment type 0x{0:04X}.")]
    SegmentType(u16),
    /// A null segment with a non-zero size.
    #[error("Null segment declares {0} bytes.")]
    NullSegmentSize(u32),
    /// Font header bytes after the null segment.
    #[error("Font header data continues after the null segment.")]
    TrailingSegmentData,
    /// A font header closed in the middle of a segment.
    #[error("Font header ended before its segments were complete.")]
    SegmentsTruncated,
    /// An escape sequence interrupted by an unexpected byte.
    #[error("Malformed escape sequence.")]
    MalformedEscape,
    /// An escape sequence value field without a terminator.
    #[error("Escape sequence value exceeds {0} characters.")]
    LongValue(usize),
    /// A logical operation outside 0 to 255.
    #[error("Logical operation {0} is out of range.")]
    RopRange(i64),
    /// A macro definition closed while none was open.
    #[error("Macro definition ended without a start.")]
    UnbalancedMacro,
    /// A PJL language switch to a language not decoded here.
    #[error("Unsupported language {0}.")]
    Language(String),
    /// Data ended while a structure was still pending.
    #[error(
        "End of data within {kind} (starting {echo}); {outstanding} bytes outstanding."
    )]
    Truncated {
        kind: PendingKind,
        echo: String,
        outstanding: u64,
    },
}
