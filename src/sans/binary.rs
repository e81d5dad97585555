//! Opaque payloads: raster blocks, embedded data and dumps.

use alloc::format;

use crate::record::RecordKind;

use super::{
    cursor::{Cx, Flow, hex, text},
    link::PendingKind,
};

/// Bytes per dump or array row.
pub(crate) const ROW: usize = 16;

/// Result of draining part of a payload.
pub(crate) struct Drain {
    pub consumed: u64,
    pub suspended: bool,
}

/// Consume up to `owed` bytes of the current payload.
///
/// With `show` set, complete rows are passed to `emit_row`; a partial row is
/// held back until its bytes arrive, or flushed at the end of data in whole
/// multiples of `unit`. On suspension the pending state is set to `kind`.
pub(crate) fn drain(
    cx: &mut Cx<'_, '_, '_>,
    owed: u64,
    show: bool,
    unit: usize,
    kind: PendingKind,
    mut emit_row: impl FnMut(&mut Cx<'_, '_, '_>, u64, &[u8]),
) -> Drain {
    let mut consumed = 0;

    while consumed < owed {
        let left = owed - consumed;
        let rest = cx.rest();

        let n = if show {
            left.min(ROW as u64) as usize
        } else {
            left.min(rest.len() as u64) as usize
        };

        if n == 0 || rest.len() < n {
            if cx.end_of_data && show && rest.len() >= unit {
                let n = rest.len() - rest.len() % unit;
                let offset = cx.offset();
                emit_row(cx, offset, &rest[..n]);
                cx.advance(n);
                consumed += n as u64;
            }

            cx.link.payload_remaining -= consumed;

            let rest = cx.rest();
            if rest.is_empty() {
                cx.await_payload(kind);
            } else {
                cx.backtrack(kind, n - rest.len());
            }

            return Drain {
                consumed,
                suspended: true,
            };
        }

        if show {
            let offset = cx.offset();
            emit_row(cx, offset, &rest[..n]);
        }

        cx.advance(n);
        consumed += n as u64;
    }

    cx.link.payload_remaining -= consumed;

    Drain {
        consumed,
        suspended: false,
    }
}

/// Announce a payload of `len` bytes and route it to the binary decoder.
pub(crate) fn begin(
    cx: &mut Cx<'_, '_, '_>,
    offset: u64,
    label: &str,
    len: u64,
    kind: PendingKind,
) {
    cx.emit(
        offset,
        RecordKind::BinaryDump,
        label,
        format!("{len} bytes"),
        "",
    );
    owe(cx, len, kind);
}

/// Route `len` payload bytes to the binary decoder without a header record.
pub(crate) fn owe(cx: &mut Cx<'_, '_, '_>, len: u64, kind: PendingKind) {
    cx.link.payload_remaining = len;
    if len > 0 {
        cx.link.pending = kind;
    }
}

pub(crate) fn dump_row(cx: &mut Cx<'_, '_, '_>, offset: u64, row: &[u8]) {
    cx.emit(offset, RecordKind::DumpRow, "", hex(row), text(row));
}

/// Resume a raster or binary payload.
pub(crate) fn step(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let kind = cx.link.pending;
    let owed = cx.link.payload_remaining;
    let show = cx.options().show_binary;

    if drain(cx, owed, show, 1, kind, dump_row).suspended {
        Flow::Suspend
    } else {
        cx.link.clear_pending();
        Flow::Continue
    }
}
