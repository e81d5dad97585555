//! Classification of every PCL XL tag byte.

use alloc::{format, string::String, vec::Vec};

/// Byte order declared by a stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// `(`: multi-byte values are little-endian.
    LittleEndian,
    /// `)`: multi-byte values are big-endian.
    BigEndian,
    /// `'`: ASCII binding, not supported.
    Ascii,
}

/// Base type of a data-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    UByte,
    UInt16,
    UInt32,
    SInt16,
    SInt32,
    Real32,
}

impl BaseType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::UByte => "ubyte",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::SInt16 => "sint16",
            Self::SInt32 => "sint32",
            Self::Real32 => "real32",
        }
    }

    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::UByte => 1,
            Self::UInt16 | Self::SInt16 => 2,
            Self::UInt32 | Self::SInt32 | Self::Real32 => 4,
        }
    }

    /// Render one element of this type.
    ///
    /// `r` must hold exactly [`BaseType::size`] bytes.
    pub fn format(self, r: &[u8], is_little_endian: bool) -> String {
        macro_rules! element {
            ($t:ty) => {{
                let mut a = [0; size_of::<$t>()];
                a.copy_from_slice(r);

                let x = if is_little_endian {
                    <$t>::from_le_bytes(a)
                } else {
                    <$t>::from_be_bytes(a)
                };

                format!("{x}")
            }};
        }

        match self {
            Self::UByte => element!(u8),
            Self::UInt16 => element!(u16),
            Self::UInt32 => element!(u32),
            Self::SInt16 => element!(i16),
            Self::SInt32 => element!(i32),
            Self::Real32 => element!(f32),
        }
    }

    /// Render a run of elements, separated by `sep`.
    pub fn format_all(self, r: &[u8], is_little_endian: bool, sep: &str) -> String {
        r.chunks_exact(self.size())
            .map(|e| self.format(e, is_little_endian))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Arity of a data-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Xy,
    Box,
    Array,
}

impl Shape {
    /// Number of elements, if fixed.
    pub const fn arity(self) -> Option<usize> {
        match self {
            Self::Scalar => Some(1),
            Self::Xy => Some(2),
            Self::Box => Some(4),
            Self::Array => None,
        }
    }
}

/// Download groups bracketed by `Begin*` and `End*` operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    FontHeader,
    Char,
    Stream,
    Image,
    RastPattern,
    Scan,
    LineCap,
}

/// Part an operator plays in a download group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    None,
    Opens(Group),
    Closes(Group),
}

/// Classification of a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Whitespace,
    /// First byte of a stream header.
    Binding(Binding),
    /// First byte of a Universal Exit Language sequence.
    Escape,
    Operator(GroupRole),
    DataType(BaseType, Shape),
    /// Attribute identifier with an identifier of `width` bytes.
    AttributeId { width: usize },
    /// Embedded data with a length of `width` bytes.
    EmbeddedData { width: usize },
    Reserved,
}

/// A tag table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub name: &'static str,
    pub kind: TagKind,
}

/// Entry for reserved tag bytes.
pub const UNKNOWN: Tag = Tag {
    name: "Unknown",
    kind: TagKind::Reserved,
};

/// Look up the entry for a tag byte.
pub fn tag(b: u8) -> &'static Tag {
    &TAGS[b as usize]
}

static TAGS: [Tag; 256] = {
    let mut table = [UNKNOWN; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
};

const fn classify(b: u8) -> Tag {
    use BaseType::*;
    use GroupRole::{Closes, Opens};
    use self::Binding as Bind;
    use Shape::*;
    use TagKind::*;

    const OP: TagKind = Operator(GroupRole::None);

    let (name, kind) = match b {
        0x00 | 0x09..=0x0D | 0x20 => ("whitespace", Whitespace),
        0x1B => ("ESC", Escape),
        0x27 => ("ASCII binding", Binding(Bind::Ascii)),
        0x28 => ("little-endian binding", Binding(Bind::LittleEndian)),
        0x29 => ("big-endian binding", Binding(Bind::BigEndian)),

        0x41 => ("BeginSession", OP),
        0x42 => ("EndSession", OP),
        0x43 => ("BeginPage", OP),
        0x44 => ("EndPage", OP),
        0x46 => ("VendorUnique", OP),
        0x47 => ("Comment", OP),
        0x48 => ("OpenDataSource", OP),
        0x49 => ("CloseDataSource", OP),
        0x4A => ("EchoComment", OP),
        0x4B => ("Query", OP),
        0x4C => ("Diagnostic3", OP),
        0x4F => ("BeginFontHeader", Operator(Opens(Group::FontHeader))),
        0x50 => ("ReadFontHeader", OP),
        0x51 => ("EndFontHeader", Operator(Closes(Group::FontHeader))),
        0x52 => ("BeginChar", Operator(Opens(Group::Char))),
        0x53 => ("ReadChar", OP),
        0x54 => ("EndChar", Operator(Closes(Group::Char))),
        0x55 => ("RemoveFont", OP),
        0x56 => ("SetCharAttributes", OP),
        0x57 => ("SetDefaultGS", OP),
        0x58 => ("SetColorTreatment", OP),
        0x5B => ("BeginStream", Operator(Opens(Group::Stream))),
        0x5C => ("ReadStream", OP),
        0x5D => ("EndStream", Operator(Closes(Group::Stream))),
        0x5E => ("ExecStream", OP),
        0x5F => ("RemoveStream", OP),
        0x60 => ("PopGS", OP),
        0x61 => ("PushGS", OP),
        0x62 => ("SetClipReplace", OP),
        0x63 => ("SetBrushSource", OP),
        0x64 => ("SetCharAngle", OP),
        0x65 => ("SetCharScale", OP),
        0x66 => ("SetCharShear", OP),
        0x67 => ("SetClipIntersect", OP),
        0x68 => ("SetClipRectangle", OP),
        0x69 => ("SetClipToPage", OP),
        0x6A => ("SetColorSpace", OP),
        0x6B => ("SetCursor", OP),
        0x6C => ("SetCursorRel", OP),
        0x6D => ("SetHalftoneMethod", OP),
        0x6E => ("SetFillMode", OP),
        0x6F => ("SetFont", OP),
        0x70 => ("SetLineDash", OP),
        0x71 => ("SetLineCap", OP),
        0x72 => ("SetLineJoin", OP),
        0x73 => ("SetMiterLimit", OP),
        0x74 => ("SetPageDefaultCTM", OP),
        0x75 => ("SetPageOrigin", OP),
        0x76 => ("SetPageRotation", OP),
        0x77 => ("SetPageScale", OP),
        0x78 => ("SetPaintTxMode", OP),
        0x79 => ("SetPenSource", OP),
        0x7A => ("SetPenWidth", OP),
        0x7B => ("SetROP", OP),
        0x7C => ("SetSourceTxMode", OP),
        0x7D => ("SetCharBoldValue", OP),
        0x7E => ("SetNeutralAxis", OP),
        0x7F => ("SetClipMode", OP),
        0x80 => ("SetPathToClip", OP),
        0x81 => ("SetCharSubMode", OP),
        0x82 => ("BeginUserDefinedLineCap", Operator(Opens(Group::LineCap))),
        0x83 => ("EndUserDefinedLineCap", Operator(Closes(Group::LineCap))),
        0x84 => ("CloseSubPath", OP),
        0x85 => ("NewPath", OP),
        0x86 => ("PaintPath", OP),
        0x91 => ("ArcPath", OP),
        0x92 => ("SetColorTrapping", OP),
        0x93 => ("BezierPath", OP),
        0x94 => ("SetAdaptiveHalftoning", OP),
        0x95 => ("BezierRelPath", OP),
        0x96 => ("Chord", OP),
        0x97 => ("ChordPath", OP),
        0x98 => ("Ellipse", OP),
        0x99 => ("EllipsePath", OP),
        0x9B => ("LinePath", OP),
        0x9D => ("LineRelPath", OP),
        0x9E => ("Pie", OP),
        0x9F => ("PiePath", OP),
        0xA0 => ("Rectangle", OP),
        0xA1 => ("RectanglePath", OP),
        0xA2 => ("RoundRectangle", OP),
        0xA3 => ("RoundRectanglePath", OP),
        0xA8 => ("Text", OP),
        0xA9 => ("TextPath", OP),
        0xB0 => ("BeginImage", Operator(Opens(Group::Image))),
        0xB1 => ("ReadImage", OP),
        0xB2 => ("EndImage", Operator(Closes(Group::Image))),
        0xB3 => ("BeginRastPattern", Operator(Opens(Group::RastPattern))),
        0xB4 => ("ReadRastPattern", OP),
        0xB5 => ("EndRastPattern", Operator(Closes(Group::RastPattern))),
        0xB6 => ("BeginScan", Operator(Opens(Group::Scan))),
        0xB8 => ("EndScan", Operator(Closes(Group::Scan))),
        0xB9 => ("ScanLineRel", OP),
        0xBF => ("PassThrough", OP),

        0xC0 => ("ubyte", DataType(UByte, Scalar)),
        0xC1 => ("uint16", DataType(UInt16, Scalar)),
        0xC2 => ("uint32", DataType(UInt32, Scalar)),
        0xC3 => ("sint16", DataType(SInt16, Scalar)),
        0xC4 => ("sint32", DataType(SInt32, Scalar)),
        0xC5 => ("real32", DataType(Real32, Scalar)),
        0xC8 => ("ubyte_array", DataType(UByte, Array)),
        0xC9 => ("uint16_array", DataType(UInt16, Array)),
        0xCA => ("uint32_array", DataType(UInt32, Array)),
        0xCB => ("sint16_array", DataType(SInt16, Array)),
        0xCC => ("sint32_array", DataType(SInt32, Array)),
        0xCD => ("real32_array", DataType(Real32, Array)),
        0xD0 => ("ubyte_xy", DataType(UByte, Xy)),
        0xD1 => ("uint16_xy", DataType(UInt16, Xy)),
        0xD2 => ("uint32_xy", DataType(UInt32, Xy)),
        0xD3 => ("sint16_xy", DataType(SInt16, Xy)),
        0xD4 => ("sint32_xy", DataType(SInt32, Xy)),
        0xD5 => ("real32_xy", DataType(Real32, Xy)),
        0xE0 => ("ubyte_box", DataType(UByte, Box)),
        0xE1 => ("uint16_box", DataType(UInt16, Box)),
        0xE2 => ("uint32_box", DataType(UInt32, Box)),
        0xE3 => ("sint16_box", DataType(SInt16, Box)),
        0xE4 => ("sint32_box", DataType(SInt32, Box)),
        0xE5 => ("real32_box", DataType(Real32, Box)),

        0xF8 => ("attr_ubyte", AttributeId { width: 1 }),
        0xF9 => ("attr_uint16", AttributeId { width: 2 }),
        0xFA => ("dataLength", EmbeddedData { width: 4 }),
        0xFB => ("dataLengthByte", EmbeddedData { width: 1 }),

        _ => return UNKNOWN,
    };

    Tag { name, kind }
}
