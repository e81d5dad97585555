//! Continuation state threaded between buffers, and the dispatch loop.

use alloc::string::{String, ToString};
use core::fmt;

use log::{trace, warn};
use tinyvec::ArrayVec;

use crate::{
    record::{Options, RecordKind, RecordSink, StructuralRecord},
    stats::Statistics,
};

use super::{
    Anomaly, binary,
    cursor::{Cx, Flow, hex},
    font, pcl, pjl,
    xl::{self, XlContext},
};

/// The structure left incomplete at the end of the previous buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingKind {
    #[default]
    None,
    XlTag,
    EscapeSequence,
    CombinedSequence,
    TextRun,
    PjlLine,
    FontHeader,
    SegmentedData,
    RasterBlock,
    BinaryData,
    AttributeArray,
}

impl PendingKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "nothing",
            Self::XlTag => "PCL XL tag",
            Self::EscapeSequence => "escape sequence",
            Self::CombinedSequence => "combined escape sequence",
            Self::TextRun => "text",
            Self::PjlLine => "PJL line",
            Self::FontHeader => "font header",
            Self::SegmentedData => "font segment data",
            Self::RasterBlock => "raster data",
            Self::BinaryData => "binary data",
            Self::AttributeArray => "attribute array",
        }
    }

    /// Whether bytes of this structure are consumed as they arrive.
    pub fn is_payload(self) -> bool {
        matches!(
            self,
            Self::FontHeader
                | Self::SegmentedData
                | Self::RasterBlock
                | Self::BinaryData
                | Self::AttributeArray
        )
    }
}

impl fmt::Display for PendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The language of the current region of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Pcl,
    Pjl,
    Xl,
}

/// Progress through a PCL combined escape sequence such as `ESC&l1o2A`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Combined {
    #[default]
    Inactive,
    Active {
        /// Offset of the `ESC` opening the sequence.
        start_offset: u64,
        /// Only the first component has been decoded.
        is_first_chunk: bool,
        /// The last decoded component carried a final terminator.
        is_last_chunk: bool,
        /// Some component was not recognised.
        modified: bool,
        prefix: u8,
        group: u8,
    },
}

impl Combined {
    /// Position of a component within its sequence, for display.
    pub(crate) fn position(self) -> &'static str {
        match self {
            Self::Inactive => "",
            Self::Active {
                is_last_chunk: true,
                modified: true,
                ..
            } => "combined (last, modified)",
            Self::Active {
                is_last_chunk: true,
                ..
            } => "combined (last)",
            Self::Active {
                is_first_chunk: true,
                ..
            } => "combined (first)",
            Self::Active { .. } => "combined",
        }
    }
}

/// Options, statistics and sink shared by every call of one pass.
pub struct Env<'a> {
    pub options: &'a Options,
    pub stats: &'a mut Statistics,
    pub sink: &'a mut dyn RecordSink,
}

impl<'a> Env<'a> {
    pub fn new(
        options: &'a Options,
        stats: &'a mut Statistics,
        sink: &'a mut dyn RecordSink,
    ) -> Self {
        Self {
            options,
            stats,
            sink,
        }
    }
}

/// Outcome of one [`LinkData::resume`] call.
#[derive(Debug)]
pub struct Step {
    /// Bytes of the buffer consumed. The rest must be offered again.
    pub consumed: usize,
    /// Records emitted.
    pub produced: usize,
    /// Successor state.
    pub link: LinkData,
}

/// All decoding state carried between buffers.
///
/// A fresh value starts in PCL 5, with nothing pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkData {
    pub(crate) pending: PendingKind,
    pub(crate) header_deficit: usize,
    pub(crate) payload_remaining: u64,
    pub(crate) echo_prefix: ArrayVec<[u8; 2]>,
    pub(crate) backtracking: bool,
    pub(crate) macro_depth: u32,
    pub(crate) combined: Combined,
    pub(crate) dialect: Dialect,
    pub(crate) xl: XlContext,
}

impl LinkData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in a given dialect, for example PCL XL for a bare `.pxl` stream.
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn pending_kind(&self) -> PendingKind {
        self.pending
    }

    pub fn header_deficit(&self) -> usize {
        self.header_deficit
    }

    pub fn payload_remaining(&self) -> u64 {
        self.payload_remaining
    }

    pub fn echo_prefix(&self) -> &[u8] {
        &self.echo_prefix
    }

    pub fn is_backtracking(&self) -> bool {
        self.backtracking
    }

    pub fn macro_depth(&self) -> u32 {
        self.macro_depth
    }

    pub fn combined(&self) -> Combined {
        self.combined
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Decode as many complete structures from `r` as possible.
    ///
    /// `offset` is the absolute offset of `r[0]` within the stream. Set
    /// `end_of_data` on the final call of a pass, so runs waiting for a
    /// terminator are flushed.
    pub fn resume(self, r: &[u8], offset: u64, end_of_data: bool, env: &mut Env<'_>) -> Step {
        if self.pending != PendingKind::None {
            trace!(
                "{offset}: resuming {} ({} bytes offered)",
                self.pending,
                r.len()
            );
        }

        let mut cx = Cx::new(r, offset, end_of_data, self, env);

        while dispatch(&mut cx) == Flow::Continue {}

        cx.into_step()
    }

    /// End a pass at `offset`, the length of the stream.
    ///
    /// Emits a single warning if a structure is still pending, and returns
    /// whether the stream ended cleanly.
    pub fn finish(&self, offset: u64, env: &mut Env<'_>) -> bool {
        let (kind, outstanding) = match (self.pending, self.combined) {
            (PendingKind::None, Combined::Inactive) => return true,
            (PendingKind::None, Combined::Active { .. }) => (PendingKind::CombinedSequence, 1),
            (kind, _) if !kind.is_payload() => (kind, self.header_deficit as u64),
            (kind, _) => (kind, self.payload_remaining),
        };

        let anomaly = Anomaly::Truncated {
            kind,
            echo: hex(&self.echo_prefix),
            outstanding,
        };

        warn!("{offset}: {anomaly}");
        env.sink.add_record(StructuralRecord {
            offset,
            kind: RecordKind::Warning,
            label: String::from("warning"),
            detail1: anomaly.to_string(),
            detail2: String::new(),
        });

        false
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = PendingKind::None;
        self.header_deficit = 0;
        self.backtracking = false;
        self.echo_prefix.clear();
    }
}

/// Decode one structure, or resume the pending one.
fn dispatch(cx: &mut Cx<'_, '_, '_>) -> Flow {
    match cx.link.pending {
        PendingKind::None => match cx.link.dialect {
            Dialect::Pcl => pcl::step(cx),
            Dialect::Pjl => pjl::step(cx),
            Dialect::Xl => xl::step(cx),
        },
        PendingKind::XlTag => {
            cx.link.clear_pending();
            xl::step(cx)
        }
        PendingKind::EscapeSequence | PendingKind::CombinedSequence | PendingKind::TextRun => {
            cx.link.clear_pending();
            pcl::step(cx)
        }
        PendingKind::PjlLine => {
            cx.link.clear_pending();
            pjl::step(cx)
        }
        PendingKind::FontHeader | PendingKind::SegmentedData => font::step(cx),
        PendingKind::RasterBlock | PendingKind::BinaryData => binary::step(cx),
        PendingKind::AttributeArray => xl::array_rows(cx),
    }
}
