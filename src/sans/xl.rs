//! The PCL XL tag dialect.

use alloc::{format, string::String};

use log::debug;

use crate::{
    record::RecordKind,
    stats::{Nesting, StatKey},
    tables::{
        self, BaseType, Binding, Group, GroupRole, Shape, Tag, TagKind, attributes,
        sequences::{self, NONE},
    },
};

use super::{
    Anomaly, MAX_LINE, binary,
    cursor::{Cx, Flow, text},
    font::{self, FontPhase},
    link::{Dialect, PendingKind},
};

const UEL: &[u8] = b"\x1B%-12345X";

/// PCL XL state carried between buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct XlContext {
    /// Set by a `)` stream header; little-endian until then.
    pub(crate) is_big_endian: bool,
    pub(crate) last_operator: Option<u8>,
    pub(crate) group: Option<Group>,
    pub(crate) font: Option<FontPhase>,
    /// Element type of the array being dumped.
    pub(crate) array: Option<BaseType>,
}

impl XlContext {
    fn is_little_endian(&self) -> bool {
        !self.is_big_endian
    }
}

/// Decode one tag.
pub(crate) fn step(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let Some(&b) = cx.rest().first() else {
        return cx.idle();
    };

    let entry = tables::tag(b);

    match entry.kind {
        TagKind::Whitespace => {
            cx.advance(1);
            Flow::Continue
        }
        TagKind::Escape => universal_exit(cx),
        TagKind::Binding(binding) => stream_header(cx, entry, binding),
        TagKind::Operator(role) => {
            operator(cx, b, entry, role);
            Flow::Continue
        }
        TagKind::DataType(base, Shape::Array) => array(cx, b, entry, base),
        TagKind::DataType(base, shape) => data_type(cx, b, entry, base, shape),
        TagKind::AttributeId { width } => attribute_id(cx, width),
        TagKind::EmbeddedData { width } => embedded_data(cx, b, entry, width),
        TagKind::Reserved => {
            unknown(cx, b);
            Flow::Continue
        }
    }
}

fn unknown(cx: &mut Cx<'_, '_, '_>, b: u8) {
    let nesting = cx.nesting();
    cx.count(StatKey::XlUnknownTag, nesting);
    cx.warn(cx.offset(), Anomaly::UnknownTag(b));
    cx.advance(1);
}

fn universal_exit(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let rest = cx.rest();
    let n = rest.len().min(UEL.len());

    if rest[..n] != UEL[..n] || (n < UEL.len() && cx.end_of_data) {
        unknown(cx, rest[0]);
        return Flow::Continue;
    }

    if n < UEL.len() {
        return cx.backtrack(PendingKind::XlTag, UEL.len() - n);
    }

    let (index, entry) = sequences::sequence(b'%', NONE, b'X');
    if let Some(index) = index {
        let nesting = cx.nesting();
        cx.count(StatKey::PclSequence(index), nesting);
    }

    cx.emit(
        cx.offset(),
        RecordKind::EscapeSequence,
        "ESC%-12345X",
        entry.name,
        "",
    );
    cx.advance(UEL.len());

    debug!("{}: leaving PCL XL", cx.offset());
    cx.link.xl = XlContext::default();
    cx.link.dialect = Dialect::Pjl;

    Flow::Continue
}

fn stream_header(cx: &mut Cx<'_, '_, '_>, entry: &Tag, binding: Binding) -> Flow {
    let rest = cx.rest();
    let window = &rest[..rest.len().min(MAX_LINE)];

    let (line, len) = match window.iter().position(|&b| b == b'\n') {
        Some(i) => (&window[1..i], i + 1),
        None if window.len() == MAX_LINE => {
            cx.warn(cx.offset(), Anomaly::LongLine(MAX_LINE));
            (&window[1..], MAX_LINE)
        }
        None if cx.end_of_data => (&window[1..], window.len()),
        None => return cx.backtrack(PendingKind::XlTag, 1),
    };

    let line = line.strip_suffix(b"\r").unwrap_or(line);

    cx.emit(
        cx.offset(),
        RecordKind::StreamHeader,
        entry.name,
        text(line).trim(),
        "",
    );

    if binding == Binding::Ascii {
        cx.warn(cx.offset(), Anomaly::AsciiBinding);
    }

    cx.link.xl.is_big_endian = binding == Binding::BigEndian;
    cx.advance(len);

    Flow::Continue
}

fn operator(cx: &mut Cx<'_, '_, '_>, b: u8, entry: &Tag, role: GroupRole) {
    let nesting = match role {
        GroupRole::Opens(_) => Nesting::Parent,
        _ => cx.nesting(),
    };

    let offset = cx.offset();
    cx.count(StatKey::XlTag(b), nesting);
    cx.emit(
        offset,
        RecordKind::Operator,
        entry.name,
        format!("0x{b:02X}"),
        "",
    );
    cx.advance(1);

    match role {
        GroupRole::Opens(group) => {
            match group {
                Group::Stream => cx.link.macro_depth += 1,
                Group::FontHeader => cx.link.xl.font = Some(FontPhase::Start),
                _ => {}
            }
            cx.link.xl.group = Some(group);
        }
        GroupRole::Closes(group) => {
            match group {
                Group::Stream => cx.link.macro_depth = cx.link.macro_depth.saturating_sub(1),
                Group::FontHeader => font::close(cx, offset),
                _ => {}
            }
            cx.link.xl.group = None;
        }
        GroupRole::None => {}
    }

    cx.link.xl.last_operator = Some(b);
}

fn data_type(cx: &mut Cx<'_, '_, '_>, b: u8, entry: &Tag, base: BaseType, shape: Shape) -> Flow {
    let len = 1 + shape.arity().unwrap_or(1) * base.size();

    let r = match cx.peek(len) {
        Ok(r) => r,
        Err(deficit) => return cx.backtrack(PendingKind::XlTag, deficit),
    };

    let values = base.format_all(&r[1..], cx.link.xl.is_little_endian(), ", ");

    let nesting = cx.nesting();
    cx.count(StatKey::XlTag(b), nesting);
    cx.emit(cx.offset(), RecordKind::DataType, entry.name, values, "");
    cx.advance(len);

    Flow::Continue
}

fn array(cx: &mut Cx<'_, '_, '_>, b: u8, entry: &Tag, base: BaseType) -> Flow {
    let rest = cx.rest();

    let Some(&length_tag) = rest.get(1) else {
        return cx.backtrack(PendingKind::XlTag, 3 - rest.len());
    };

    let width = match length_tag {
        0xC0 => 1,
        0xC1 => 2,
        0xC2 => 4,
        _ => {
            let nesting = cx.nesting();
            cx.count(StatKey::XlTag(b), nesting);
            cx.warn(cx.offset(), Anomaly::ArrayLength(length_tag));
            cx.advance(1);
            return Flow::Continue;
        }
    };

    let r = match cx.peek(2 + width) {
        Ok(r) => r,
        Err(deficit) => return cx.backtrack(PendingKind::XlTag, deficit),
    };

    let count = uint(&r[2..], cx.link.xl.is_little_endian());

    let nesting = cx.nesting();
    cx.count(StatKey::XlTag(b), nesting);
    cx.emit(
        cx.offset(),
        RecordKind::DataType,
        entry.name,
        format!("{count} elements"),
        "",
    );
    cx.advance(2 + width);

    let len = count * base.size() as u64;
    if len > 0 {
        cx.link.xl.array = Some(base);
        binary::owe(cx, len, PendingKind::AttributeArray);
    }

    Flow::Continue
}

/// Emit the rows of the array being dumped.
pub(crate) fn array_rows(cx: &mut Cx<'_, '_, '_>) -> Flow {
    let base = cx.link.xl.array.unwrap_or(BaseType::UByte);
    let is_little_endian = cx.link.xl.is_little_endian();
    let owed = cx.link.payload_remaining;

    let drained = binary::drain(
        cx,
        owed,
        true,
        base.size(),
        PendingKind::AttributeArray,
        |cx, offset, row| {
            let values = base.format_all(row, is_little_endian, " ");
            let chars = match base {
                BaseType::UByte => text(row),
                _ => String::new(),
            };
            cx.emit(offset, RecordKind::ArrayRow, base.name(), values, chars);
        },
    );

    if drained.suspended {
        Flow::Suspend
    } else {
        cx.link.xl.array = None;
        cx.link.clear_pending();
        Flow::Continue
    }
}

fn attribute_id(cx: &mut Cx<'_, '_, '_>, width: usize) -> Flow {
    let r = match cx.peek(1 + width) {
        Ok(r) => r,
        Err(deficit) => return cx.backtrack(PendingKind::XlTag, deficit),
    };

    let id = uint(&r[1..], cx.link.xl.is_little_endian()) as u16;

    let key = if attributes::is_known(id) {
        StatKey::XlAttribute(id)
    } else {
        StatKey::XlUnknownAttribute
    };

    let detail = match width {
        1 => format!("attr_ubyte 0x{id:02X}"),
        _ => format!("attr_uint16 0x{id:04X}"),
    };

    let nesting = cx.nesting();
    cx.count(key, nesting);
    cx.emit(
        cx.offset(),
        RecordKind::Attribute,
        attributes::attribute(id).name,
        detail,
        "",
    );
    cx.advance(1 + width);

    Flow::Continue
}

/// What the data following an embedded data tag holds.
enum Purpose {
    FontHeader,
    Raster(&'static str),
    Binary(&'static str),
}

fn purpose(last_operator: Option<u8>) -> Purpose {
    match last_operator {
        Some(0x50) => Purpose::FontHeader,
        Some(0x53) => Purpose::Binary("character data"),
        Some(0x5C) => Purpose::Binary("stream data"),
        Some(0xB1) => Purpose::Raster("image data"),
        Some(0xB4) => Purpose::Raster("pattern data"),
        Some(0xB9) => Purpose::Raster("scan line data"),
        Some(0xBF) => Purpose::Binary("pass-through data"),
        _ => Purpose::Binary("embedded data"),
    }
}

fn embedded_data(cx: &mut Cx<'_, '_, '_>, b: u8, entry: &Tag, width: usize) -> Flow {
    let r = match cx.peek(1 + width) {
        Ok(r) => r,
        Err(deficit) => return cx.backtrack(PendingKind::XlTag, deficit),
    };

    let len = uint(&r[1..], cx.link.xl.is_little_endian());

    let purpose = purpose(cx.link.xl.last_operator);
    let label = match purpose {
        Purpose::FontHeader => "font header data",
        Purpose::Raster(label) | Purpose::Binary(label) => label,
    };

    let nesting = cx.nesting();
    cx.count(StatKey::XlTag(b), nesting);
    cx.emit(
        cx.offset(),
        RecordKind::EmbeddedData,
        label,
        format!("{len} bytes"),
        entry.name,
    );
    cx.advance(1 + width);

    match purpose {
        Purpose::FontHeader => font::begin(cx, len),
        Purpose::Raster(_) => binary::owe(cx, len, PendingKind::RasterBlock),
        Purpose::Binary(_) => binary::owe(cx, len, PendingKind::BinaryData),
    }

    Flow::Continue
}

/// Read an unsigned integer of 1, 2 or 4 bytes.
fn uint(r: &[u8], is_little_endian: bool) -> u64 {
    let mut a = [0; size_of::<u64>()];

    if is_little_endian {
        a[..r.len()].copy_from_slice(r);
        u64::from_le_bytes(a)
    } else {
        a[size_of::<u64>() - r.len()..].copy_from_slice(r);
        u64::from_be_bytes(a)
    }
}
