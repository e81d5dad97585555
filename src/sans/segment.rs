//! Segmented font header data.
//!
//! After its descriptor, a font header holds a chain of segments, each a
//! 2-byte type and a 4-byte size (both big-endian) followed by the segment's
//! bytes. The null segment (type `0xFFFF`) ends the chain. A chain may be
//! split across any number of `ReadFontHeader` blocks, at any byte.

use alloc::format;

use either::Either::{self, Left, Right};
use tinyvec::ArrayVec;
use zerocopy::FromBytes;

use crate::record::RecordKind;

use super::{
    Anomaly, binary,
    cursor::{Cx, Flow, text},
    link::PendingKind,
};

const HEADER: usize = 6;
const NULL: [u8; 2] = [0xFF, 0xFF];

/// Whether a segment is the first of its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrdinal {
    First,
    Subsequent,
}

/// Position within a segment chain, carried between blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentChain {
    /// Reading a segment header. Bytes received from earlier blocks are held
    /// in `partial`.
    Header {
        ordinal: SegmentOrdinal,
        partial: ArrayVec<[u8; HEADER]>,
    },
    /// Bytes of the current segment still to come.
    Payload { remaining: u32 },
}

impl SegmentChain {
    pub fn new() -> Self {
        Self::header(SegmentOrdinal::First)
    }

    fn header(ordinal: SegmentOrdinal) -> Self {
        Self::Header {
            ordinal,
            partial: ArrayVec::new(),
        }
    }

    /// Whether the chain sits between two segments.
    pub fn at_boundary(&self) -> bool {
        matches!(self, Self::Header { partial, .. } if partial.is_empty())
    }
}

impl Default for SegmentChain {
    fn default() -> Self {
        Self::new()
    }
}

/// How a chain ended.
pub(crate) enum Terminal {
    EndOk,
    /// A segment header at the given offset could not be classified.
    Invalid(u64, Anomaly),
}

/// Decode segments until the current block is exhausted, the buffer runs
/// out, or the chain ends.
pub(crate) fn step(
    cx: &mut Cx<'_, '_, '_>,
    mut chain: SegmentChain,
) -> (Flow, Either<SegmentChain, Terminal>) {
    loop {
        let budget = cx.link.payload_remaining;
        if budget == 0 {
            cx.link.clear_pending();
            return (Flow::Continue, Left(chain));
        }

        chain = match chain {
            SegmentChain::Header {
                ordinal,
                mut partial,
            } => {
                let want = (HEADER - partial.len()).min(budget.min(HEADER as u64) as usize);

                let r = match cx.peek(want) {
                    Ok(r) => r,
                    Err(deficit) => {
                        let flow = cx.backtrack(PendingKind::SegmentedData, deficit);
                        return (flow, Left(SegmentChain::Header { ordinal, partial }));
                    }
                };

                let offset = cx.offset();
                partial.extend_from_slice(r);
                cx.advance(want);
                cx.link.payload_remaining -= want as u64;

                if partial.len() < HEADER {
                    SegmentChain::Header { ordinal, partial }
                } else {
                    match segment(cx, offset, ordinal, partial.into_inner()) {
                        Left(chain) => chain,
                        Right(terminal) => return (Flow::Continue, Right(terminal)),
                    }
                }
            }
            SegmentChain::Payload { remaining } => {
                let owed = budget.min(remaining as u64);
                let show = cx.options().show_binary;

                let drained = binary::drain(
                    cx,
                    owed,
                    show,
                    1,
                    PendingKind::SegmentedData,
                    binary::dump_row,
                );

                let remaining = remaining - drained.consumed as u32;
                let chain = match remaining {
                    0 => SegmentChain::header(SegmentOrdinal::Subsequent),
                    _ => SegmentChain::Payload { remaining },
                };

                if drained.suspended {
                    return (Flow::Suspend, Left(chain));
                }

                chain
            }
        };
    }
}

/// Record a complete segment header, returning the successor chain state.
fn segment(
    cx: &mut Cx<'_, '_, '_>,
    offset: u64,
    ordinal: SegmentOrdinal,
    r: [u8; HEADER],
) -> Either<SegmentChain, Terminal> {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct SegmentHeader {
        kind: [u8; 2],
        size: [u8; 4],
    }

    let SegmentHeader { kind, size } = zerocopy::transmute!(r);
    let size = u32::from_be_bytes(size);

    let Some(name) = segment_name(kind) else {
        let anomaly = Anomaly::SegmentType(u16::from_be_bytes(kind));
        return Right(Terminal::Invalid(offset, anomaly));
    };

    let code = match kind {
        NULL => "null".into(),
        _ => text(&kind),
    };

    let detail = match ordinal {
        SegmentOrdinal::First => format!("{size} bytes, first segment"),
        SegmentOrdinal::Subsequent => format!("{size} bytes"),
    };

    cx.emit(offset, RecordKind::FontSegment, code, name, detail);

    if kind == NULL {
        if size != 0 {
            cx.warn(offset, Anomaly::NullSegmentSize(size));
        }
        return Right(Terminal::EndOk);
    }

    Left(match size {
        0 => SegmentChain::header(SegmentOrdinal::Subsequent),
        _ => SegmentChain::Payload { remaining: size },
    })
}

fn segment_name(kind: [u8; 2]) -> Option<&'static str> {
    Some(match &kind {
        b"BR" => "Bitmap resolution",
        b"CC" => "Character complement",
        b"CE" => "Character enhancement",
        b"CP" => "Copyright",
        b"GC" => "Galley character",
        b"GT" => "Global TrueType data",
        b"IF" => "Intellifont face data",
        b"PA" => "PANOSE description",
        b"VE" => "Vertical exclude",
        b"VI" => "Vendor information",
        b"VR" => "Vertical rotation",
        b"VT" => "Vertical transformation",
        b"XW" => "Extended widths",
        &NULL => "Null segment",
        _ => return None,
    })
}
