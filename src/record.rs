//! Structural records and the sink receiving them.

use alloc::{format, string::String, vec::Vec};

/// Classification of a structural record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Message,
    Warning,
    StreamHeader,
    Operator,
    DataType,
    ArrayRow,
    Attribute,
    EmbeddedData,
    BinaryDump,
    DumpRow,
    FontHeader,
    FontSegment,
    EscapeSequence,
    ControlCode,
    Text,
    Pjl,
}

impl RecordKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Warning => "warning",
            Self::StreamHeader => "stream header",
            Self::Operator => "operator",
            Self::DataType => "data type",
            Self::ArrayRow => "array",
            Self::Attribute => "attribute",
            Self::EmbeddedData => "embedded data",
            Self::BinaryDump => "binary",
            Self::DumpRow => "dump",
            Self::FontHeader => "font header",
            Self::FontSegment => "font segment",
            Self::EscapeSequence => "sequence",
            Self::ControlCode => "control",
            Self::Text => "text",
            Self::Pjl => "PJL",
        }
    }
}

/// A decoded structure, located by the offset of its first byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralRecord {
    pub offset: u64,
    pub kind: RecordKind,
    pub label: String,
    pub detail1: String,
    pub detail2: String,
}

/// Receive records, in stream order.
///
/// See the [`RecordSink`](macro@crate::avec::RecordSink) derive macro for an
/// automatic implementation routing records into fields by kind.
pub trait RecordSink {
    /// Append a record.
    fn add_record(&mut self, record: StructuralRecord);
}

impl RecordSink for Vec<StructuralRecord> {
    fn add_record(&mut self, record: StructuralRecord) {
        self.push(record);
    }
}

/// Radix used when rendering offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetRadix {
    #[default]
    Decimal,
    Hexadecimal,
}

/// Options read (never written) during an analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Emit a row record for every 16 bytes of binary payload.
    pub show_binary: bool,
    pub offset_radix: OffsetRadix,
    /// Size of the chunks requested from readers.
    pub read_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_binary: false,
            offset_radix: OffsetRadix::Decimal,
            read_size: 8192,
        }
    }
}

/// Render an offset in the configured radix.
pub fn format_offset(offset: u64, radix: OffsetRadix) -> String {
    match radix {
        OffsetRadix::Decimal => format!("{offset}"),
        OffsetRadix::Hexadecimal => format!("{offset:08X}"),
    }
}

/// A report column, shared by every report backend.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub render: fn(&StructuralRecord, &Options) -> String,
}

/// The columns of a record listing, in display order.
pub const COLUMNS: [Column; 5] = [
    Column {
        name: "Offset",
        render: |r, o| format_offset(r.offset, o.offset_radix),
    },
    Column {
        name: "Type",
        render: |r, _| r.kind.name().into(),
    },
    Column {
        name: "Element",
        render: |r, _| r.label.clone(),
    },
    Column {
        name: "Description",
        render: |r, _| r.detail1.clone(),
    },
    Column {
        name: "Value",
        render: |r, _| r.detail2.clone(),
    },
];

/// Render every column of a record.
pub fn render_row(record: &StructuralRecord, options: &Options) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|c| (c.render)(record, options))
        .collect()
}
