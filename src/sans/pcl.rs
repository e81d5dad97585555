//! The PCL 5 escape dialect.

use alloc::{format, string::String};

use log::debug;

use crate::{
    record::RecordKind,
    stats::{Nesting, StatKey, control_name},
    tables::{
        Action, SymbolSetId, logical_operation,
        sequences::{self, NONE},
        symbol_set,
    },
};

use super::{
    Anomaly, binary,
    cursor::{Cx, Flow, text},
    link::{Combined, Dialect, PendingKind},
    pjl,
};

const ESC: u8 = 0x1B;

/// Longest value field accepted before a sequence is abandoned.
const MAX_VALUE: usize = 32;

/// Longest text run in one record.
const MAX_TEXT: usize = 48;

/// Decode one sequence, control code or text run.
pub(crate) fn step(cx: &mut Cx<'_, '_, '_>) -> Flow {
    if let Combined::Active { prefix, group, .. } = cx.link.combined {
        return continuation(cx, prefix, group);
    }

    let Some(&b) = cx.rest().first() else {
        return cx.idle();
    };

    match b {
        ESC => escape(cx),
        b'(' | b')' => match pjl::xl_header(cx, PendingKind::TextRun) {
            Some(flow) => flow,
            None => text_run(cx),
        },
        0x00..=0x1F | 0x7F => {
            control(cx, b);
            Flow::Continue
        }
        _ => text_run(cx),
    }
}

fn is_text(b: u8) -> bool {
    b >= 0x20 && b != 0x7F
}

fn text_run(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let rest = cx.rest();
    let window = &rest[..rest.len().min(MAX_TEXT)];

    let len = match window.iter().position(|&b| !is_text(b)) {
        Some(len) => len,
        None if window.len() == MAX_TEXT || cx.end_of_data => window.len(),
        None => return cx.backtrack(PendingKind::TextRun, 1),
    };

    cx.emit(
        cx.offset(),
        RecordKind::Text,
        "text",
        text(&rest[..len]),
        "",
    );
    cx.advance(len);

    Flow::Continue
}

fn control(cx: &mut Cx<'_, '_, '_>, b: u8) {
    let nesting = cx.nesting();
    cx.count(StatKey::PclControl(b), nesting);
    cx.emit(
        cx.offset(),
        RecordKind::ControlCode,
        control_name(b),
        format!("0x{b:02X}"),
        "",
    );
    cx.advance(1);
}

fn escape(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let Some(&p) = cx.rest().get(1) else {
        return cx.backtrack(PendingKind::EscapeSequence, 1);
    };

    match p {
        0x21..=0x2F => parameterised(cx, p),
        0x30..=0x7E => {
            let (index, entry) = sequences::sequence(p, NONE, NONE);
            let key = index.map_or(StatKey::PclUnknownSequence, StatKey::PclSequence);

            let nesting = cx.nesting();
            cx.count(key, nesting);
            cx.emit(
                cx.offset(),
                RecordKind::EscapeSequence,
                format!("ESC{}", char::from(p)),
                entry.name,
                "",
            );
            cx.advance(2);

            Flow::Continue
        }
        _ => {
            cx.warn(cx.offset(), Anomaly::MalformedEscape);
            cx.advance(1);
            Flow::Continue
        }
    }
}

/// The value field and terminator of one component.
enum Scan<'r> {
    Complete {
        value: &'r [u8],
        terminator: u8,
        len: usize,
    },
    Incomplete,
    /// Interrupted by an unexpected byte after `len` value bytes.
    Malformed(usize),
    TooLong,
}

fn scan(r: &[u8]) -> Scan<'_> {
    for (i, &c) in r.iter().enumerate() {
        match c {
            b'0'..=b'9' | b'+' | b'-' | b'.' if i < MAX_VALUE => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' => return Scan::TooLong,
            0x40..=0x7E => {
                return Scan::Complete {
                    value: &r[..i],
                    terminator: c,
                    len: i + 1,
                };
            }
            _ => return Scan::Malformed(i),
        }
    }

    Scan::Incomplete
}

fn parameterised(cx: &mut Cx<'_, '_, '_>, prefix: u8) -> Flow {
    let rest = cx.rest();

    let Some(&g) = rest.get(2) else {
        return cx.backtrack(PendingKind::EscapeSequence, 1);
    };

    let (group, at) = match g {
        0x60..=0x7E => (g, 3),
        _ => (NONE, 2),
    };

    let offset = cx.offset();

    match scan(&rest[at..]) {
        Scan::Complete {
            value,
            terminator,
            len,
        } => {
            cx.advance(at + len);
            component(cx, offset, prefix, group, value, terminator);
        }
        Scan::Incomplete => return cx.backtrack(PendingKind::EscapeSequence, 1),
        Scan::Malformed(len) => {
            cx.warn(offset, Anomaly::MalformedEscape);
            cx.advance(at + len);
        }
        Scan::TooLong => {
            cx.warn(offset, Anomaly::LongValue(MAX_VALUE));
            cx.advance(at + MAX_VALUE);
        }
    }

    Flow::Continue
}

/// Decode the next component of a combined sequence.
fn continuation(cx: &mut Cx<'_, '_, '_>, prefix: u8, group: u8) -> Flow {
    let offset = cx.offset();

    match scan(cx.rest()) {
        Scan::Complete {
            value,
            terminator,
            len,
        } => {
            cx.advance(len);
            component(cx, offset, prefix, group, value, terminator);
        }
        Scan::Incomplete => return cx.backtrack(PendingKind::CombinedSequence, 1),
        Scan::Malformed(len) => {
            cx.warn(offset, Anomaly::MalformedEscape);
            cx.link.combined = Combined::Inactive;
            cx.advance(len);
        }
        Scan::TooLong => {
            cx.warn(offset, Anomaly::LongValue(MAX_VALUE));
            cx.link.combined = Combined::Inactive;
            cx.advance(MAX_VALUE);
        }
    }

    Flow::Continue
}

/// Record a component whose bytes have been consumed, and apply its action.
fn component(
    cx: &mut Cx<'_, '_, '_>,
    offset: u64,
    prefix: u8,
    group: u8,
    value: &[u8],
    terminator: u8,
) {
    let (index, entry) = sequences::sequence(prefix, group, terminator);
    let is_final = (0x40..=0x5E).contains(&terminator);
    let number = parse_value(value);

    let combined = match cx.link.combined {
        Combined::Inactive if is_final => Combined::Inactive,
        Combined::Inactive => Combined::Active {
            start_offset: offset,
            is_first_chunk: true,
            is_last_chunk: false,
            modified: index.is_none(),
            prefix,
            group,
        },
        Combined::Active {
            start_offset,
            modified,
            ..
        } => Combined::Active {
            start_offset,
            is_first_chunk: false,
            is_last_chunk: is_final,
            modified: modified || index.is_none(),
            prefix,
            group,
        },
    };

    cx.link.combined = if is_final {
        Combined::Inactive
    } else {
        combined
    };

    let mut anomaly = None;
    let mut designated = None;

    let detail: String = match entry.action {
        Action::MacroControl => macro_action(number).into(),
        Action::SymbolSet => {
            let id = u16::try_from(number)
                .ok()
                .and_then(|n| SymbolSetId::from_parts(n, terminator.to_ascii_uppercase()));
            designated = Some(StatKey::symbol_set(id));
            id.map_or("Unknown", |id| symbol_set(id).name).into()
        }
        Action::LogicalOperation => match u8::try_from(number) {
            Ok(i) => {
                let rop = logical_operation(i);
                format!("{} ({})", rop.mnemonic, rop.expression)
            }
            Err(_) => {
                anomaly = Some(Anomaly::RopRange(number));
                String::new()
            }
        },
        Action::Plain | Action::Payload { .. } | Action::UniversalExit => {
            combined.position().into()
        }
    };

    let opens_macro = entry.action == Action::MacroControl && number == 0;
    let nesting = if opens_macro {
        Nesting::Parent
    } else {
        cx.nesting()
    };

    let key = index.map_or(StatKey::PclUnknownSequence, StatKey::PclSequence);
    cx.count(key, nesting);
    if let Some(key) = designated {
        cx.count(key, nesting);
    }
    cx.emit(
        offset,
        RecordKind::EscapeSequence,
        render(prefix, group, value, terminator),
        entry.name,
        detail,
    );

    if let Some(anomaly) = anomaly {
        cx.warn(offset, anomaly);
    }

    match entry.action {
        Action::MacroControl if number == 0 => cx.link.macro_depth += 1,
        Action::MacroControl if number == 1 => match cx.link.macro_depth {
            0 => cx.warn(offset, Anomaly::UnbalancedMacro),
            _ => cx.link.macro_depth -= 1,
        },
        Action::Payload { label, raster } if number > 0 => {
            let kind = if raster {
                PendingKind::RasterBlock
            } else {
                PendingKind::BinaryData
            };
            let data = cx.offset();
            binary::begin(cx, data, label, number as u64, kind);
        }
        Action::UniversalExit => {
            debug!("{offset}: leaving PCL");
            cx.link.combined = Combined::Inactive;
            cx.link.dialect = Dialect::Pjl;
        }
        _ => {}
    }
}

/// The integral part of a value field, saturating.
fn parse_value(value: &[u8]) -> i64 {
    let (negative, digits) = match value.split_first() {
        Some((b'-', digits)) => (true, digits),
        Some((b'+', digits)) => (false, digits),
        _ => (false, value),
    };

    let n = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |n, b| {
            n.saturating_mul(10).saturating_add((b - b'0') as i64)
        });

    if negative { -n } else { n }
}

fn render(prefix: u8, group: u8, value: &[u8], terminator: u8) -> String {
    let mut s = String::from("ESC");
    s.push(char::from(prefix));
    if group != NONE {
        s.push(char::from(group));
    }
    s.push_str(&text(value));
    s.push(char::from(terminator.to_ascii_uppercase()));
    s
}

fn macro_action(number: i64) -> &'static str {
    match number {
        0 => "Start macro definition",
        1 => "Stop macro definition",
        2 => "Execute macro",
        3 => "Call macro",
        4 => "Enable overlay",
        5 => "Disable overlay",
        6 => "Delete all macros",
        7 => "Delete temporary macros",
        8 => "Delete macro ID",
        9 => "Make temporary",
        10 => "Make permanent",
        _ => "Unknown macro operation",
    }
}
