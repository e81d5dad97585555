//! The PJL job wrapper, and switches between dialects.

use alloc::{string::String, vec::Vec};

use log::debug;

use crate::record::RecordKind;

use super::{
    Anomaly, MAX_LINE,
    cursor::{Cx, Flow, text},
    link::{Dialect, PendingKind},
};

const PREFIX: &[u8] = b"@PJL";

/// Follows the binding byte of a PCL XL stream header.
const XL_HEADER: &[u8] = b" HP-PCL XL";

/// Decode one PJL line, or leave PJL.
pub(crate) fn step(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let Some(&b) = cx.rest().first() else {
        return cx.idle();
    };

    match b {
        b'@' => line(cx),
        b'\r' | b'\n' | b'\t' | b' ' | 0x0C => {
            cx.advance(1);
            Flow::Continue
        }
        b'(' | b')' => xl_header(cx, PendingKind::PjlLine).unwrap_or_else(|| leave(cx)),
        _ => leave(cx),
    }
}

/// Hand the rest of the job to PCL 5.
fn leave(cx: &mut Cx<'_, '_, '_>) -> Flow {
    debug!("{}: entering PCL", cx.offset());
    cx.link.dialect = Dialect::Pcl;
    Flow::Continue
}

/// Switch to PCL XL if a stream header starts at the cursor.
///
/// Returns `None` if the bytes cannot start a stream header.
pub(crate) fn xl_header(cx: &mut Cx<'_, '_, '_>, kind: PendingKind) -> Option<Flow> {
    let tail = &cx.rest()[1..];
    let n = tail.len().min(XL_HEADER.len());

    if tail[..n] != XL_HEADER[..n] || (n < XL_HEADER.len() && cx.end_of_data) {
        return None;
    }

    if n < XL_HEADER.len() {
        return Some(cx.backtrack(kind, XL_HEADER.len() - n));
    }

    debug!("{}: entering PCL XL", cx.offset());
    cx.link.dialect = Dialect::Xl;
    Some(Flow::Continue)
}

fn line(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let rest = cx.rest();
    let n = rest.len().min(PREFIX.len());

    if !rest[..n].eq_ignore_ascii_case(&PREFIX[..n]) || (n < PREFIX.len() && cx.end_of_data) {
        return leave(cx);
    }

    let window = &rest[..rest.len().min(MAX_LINE)];

    let (line, len) = match window.iter().position(|&b| b == b'\n') {
        Some(i) => (&window[..i], i + 1),
        None if window.len() == MAX_LINE => {
            cx.warn(cx.offset(), Anomaly::LongLine(MAX_LINE));
            (window, MAX_LINE)
        }
        None if cx.end_of_data => (window, window.len()),
        None => return cx.backtrack(PendingKind::PjlLine, 1),
    };

    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let offset = cx.offset();

    cx.emit(
        offset,
        RecordKind::Pjl,
        "@PJL",
        text(&line[PREFIX.len()..]).trim(),
        "",
    );
    cx.advance(len);

    if let Some(language) = language(line) {
        match language.as_str() {
            "PCLXL" => {
                debug!("{offset}: entering PCL XL");
                cx.link.dialect = Dialect::Xl;
            }
            "PCL" => {
                debug!("{offset}: entering PCL");
                cx.link.dialect = Dialect::Pcl;
            }
            _ => {
                cx.warn(offset, Anomaly::Language(language));
                cx.link.dialect = Dialect::Pcl;
            }
        }
    }

    Flow::Continue
}

/// The language named by an `ENTER LANGUAGE` command.
fn language(line: &[u8]) -> Option<String> {
    const COMMAND: &[u8] = b"@PJLENTERLANGUAGE=";

    let squeezed: Vec<u8> = line
        .iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(u8::to_ascii_uppercase)
        .collect();

    squeezed.strip_prefix(COMMAND).map(text)
}
