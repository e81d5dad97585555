//! Soft-font headers, downloaded in one or more `ReadFontHeader` blocks.

use alloc::format;

use either::Either::{Left, Right};
use zerocopy::FromBytes;

use crate::{
    record::RecordKind,
    stats::StatKey,
    tables::{SymbolSetId, symbol_set},
};

use super::{
    Anomaly, binary,
    cursor::{Cx, Flow},
    link::PendingKind,
    segment::{self, SegmentChain, Terminal},
};

/// Size of the descriptor opening a font header.
const DESCRIPTOR: usize = 8;

/// Progress through the font header of the open `BeginFontHeader` group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontPhase {
    /// Waiting for the descriptor.
    #[default]
    Start,
    /// The descriptor is present and about to be recorded.
    ShowHeader,
    ShowSegmentedData(SegmentChain),
    /// The null segment has been seen.
    EndOk,
    BadSequenceDetected(Anomaly),
    /// The header is invalid; its blocks are dumped as binary data.
    BadSequenceFallback,
}

/// Route a block of `len` bytes to the font header decoder.
pub(crate) fn begin(cx: &mut Cx<'_, '_, '_>, len: u64) {
    let kind = match cx.link.xl.font.get_or_insert_default() {
        FontPhase::ShowSegmentedData(_) | FontPhase::EndOk => PendingKind::SegmentedData,
        _ => PendingKind::FontHeader,
    };
    binary::owe(cx, len, kind);
}

/// End the font header at the `EndFontHeader` operator at `offset`.
pub(crate) fn close(cx: &mut Cx<'_, '_, '_>, offset: u64) {
    if let Some(FontPhase::ShowSegmentedData(chain)) = cx.link.xl.font.take() {
        if !chain.at_boundary() {
            cx.warn(offset, Anomaly::SegmentsTruncated);
        }
    }
}

/// Decode as much of the current block as possible.
pub(crate) fn step(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let mut phase = cx.link.xl.font.take().unwrap_or_default();

    let flow = loop {
        let (successor, flow) = advance(cx, phase);
        phase = successor;

        if let Some(flow) = flow {
            break flow;
        }
    };

    cx.link.xl.font = Some(phase);
    flow
}

/// Transition to another phase, returning a flow once the block is done or
/// suspended.
fn advance(cx: &mut Cx<'_, '_, '_>, phase: FontPhase) -> (FontPhase, Option<Flow>) {
    match phase {
        FontPhase::Start => {
            let budget = cx.link.payload_remaining;
            if budget < DESCRIPTOR as u64 {
                let anomaly = Anomaly::ShortDescriptor(budget);
                (FontPhase::BadSequenceDetected(anomaly), None)
            } else if let Err(deficit) = cx.peek(DESCRIPTOR) {
                let flow = cx.backtrack(PendingKind::FontHeader, deficit);
                (FontPhase::Start, Some(flow))
            } else {
                (FontPhase::ShowHeader, None)
            }
        }
        FontPhase::ShowHeader => {
            let r = match cx.peek_array() {
                Ok(r) => r,
                Err(deficit) => {
                    let flow = cx.backtrack(PendingKind::FontHeader, deficit);
                    return (FontPhase::ShowHeader, Some(flow));
                }
            };

            match descriptor(cx, r) {
                Ok(()) => {
                    cx.advance(DESCRIPTOR);
                    cx.link.payload_remaining -= DESCRIPTOR as u64;
                    (FontPhase::ShowSegmentedData(SegmentChain::new()), None)
                }
                Err(anomaly) => (FontPhase::BadSequenceDetected(anomaly), None),
            }
        }
        FontPhase::ShowSegmentedData(chain) => match segment::step(cx, chain) {
            (flow, Left(chain)) => (FontPhase::ShowSegmentedData(chain), Some(flow)),
            (_, Right(Terminal::EndOk)) => (FontPhase::EndOk, None),
            (_, Right(Terminal::Invalid(offset, anomaly))) => {
                cx.warn(offset, anomaly);
                (FontPhase::BadSequenceFallback, None)
            }
        },
        FontPhase::EndOk => {
            if cx.link.payload_remaining > 0 {
                let anomaly = Anomaly::TrailingSegmentData;
                (FontPhase::BadSequenceDetected(anomaly), None)
            } else {
                cx.link.clear_pending();
                (FontPhase::EndOk, Some(Flow::Continue))
            }
        }
        FontPhase::BadSequenceDetected(anomaly) => {
            cx.warn(cx.offset(), anomaly);
            (FontPhase::BadSequenceFallback, None)
        }
        FontPhase::BadSequenceFallback => {
            let len = cx.link.payload_remaining;
            cx.link.clear_pending();
            if len > 0 {
                let offset = cx.offset();
                binary::begin(cx, offset, "font header data", len, PendingKind::BinaryData);
            }
            (FontPhase::BadSequenceFallback, Some(Flow::Continue))
        }
    }
}

/// Record the fields of a format 0 descriptor.
fn descriptor(cx: &mut Cx<'_, '_, '_>, r: [u8; DESCRIPTOR]) -> Result<(), Anomaly> {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct Descriptor {
        format: u8,
        orientation: u8,
        symbol_set: [u8; 2],
        scaling: u8,
        variety: u8,
        characters: [u8; 2],
    }

    let Descriptor {
        format,
        orientation,
        symbol_set: packed,
        scaling,
        variety,
        characters,
    } = zerocopy::transmute!(r);

    if format != 0 {
        Err(Anomaly::FontFormat(format))?;
    }

    let orientation_name = match orientation {
        0 => "Portrait",
        1 => "Landscape",
        2 => "Reverse portrait",
        3 => "Reverse landscape",
        _ => "Unknown",
    };

    let id = SymbolSetId::from_packed(u16::from_be_bytes(packed));

    let scaling_name = match scaling {
        0 => "Intellifont",
        1 => "TrueType",
        254 => "Bitmap",
        _ => "Unknown",
    };

    let nesting = cx.nesting();
    cx.count(StatKey::symbol_set(Some(id)), nesting);

    let offset = cx.offset();
    let field = RecordKind::FontHeader;

    cx.emit(offset, field, "Format", "0", "Download");
    cx.emit(
        offset + 1,
        field,
        "Orientation",
        format!("{orientation}"),
        orientation_name,
    );
    cx.emit(
        offset + 2,
        field,
        "Symbol set",
        format!("{id}"),
        symbol_set(id).name,
    );
    cx.emit(
        offset + 4,
        field,
        "Scaling technology",
        format!("{scaling}"),
        scaling_name,
    );
    cx.emit(offset + 5, field, "Variety", format!("{variety}"), "");
    cx.emit(
        offset + 6,
        field,
        "Characters",
        format!("{}", u16::from_be_bytes(characters)),
        "",
    );

    Ok(())
}
