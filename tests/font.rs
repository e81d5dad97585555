use prnscope::{
    avec::{self, RecordKind, StructuralRecord, Summary},
    record::Options,
    stats::Statistics,
};

/// Format 0 descriptor: portrait, PC-8, TrueType, 3 characters.
const DESCRIPTOR: [u8; 8] = [0, 0, 0x01, 0x55, 1, 0, 0x00, 0x03];

const NULL_SEGMENT: [u8; 6] = [0xFF, 0xFF, 0, 0, 0, 0];

/// A little-endian stream opening a font header, with one `ReadFontHeader`
/// per block. The first block's data starts at offset 23.
fn font_stream(blocks: &[&[u8]], close: bool) -> Vec<u8> {
    let mut data = b"( HP-PCL XL;2;0\n".to_vec();
    data.push(0x4F);

    for block in blocks {
        data.push(0x50);
        data.push(0xFA);
        data.extend((block.len() as u32).to_le_bytes());
        data.extend_from_slice(block);
    }

    if close {
        data.push(0x51);
    }
    data
}

fn analyse(data: &[u8]) -> (Vec<StructuralRecord>, Summary) {
    let mut records = Vec::new();
    let options = Options::default();
    let summary = avec::decode_slice(data, &options, &mut Statistics::new(), &mut records);
    (records, summary)
}

fn rows(records: &[StructuralRecord]) -> Vec<(u64, RecordKind, &str, &str, &str)> {
    records
        .iter()
        .map(|r| (r.offset, r.kind, &*r.label, &*r.detail1, &*r.detail2))
        .collect()
}

fn warnings(records: &[StructuralRecord]) -> Vec<(u64, &str)> {
    records
        .iter()
        .filter(|r| r.kind == RecordKind::Warning)
        .map(|r| (r.offset, &*r.detail1))
        .collect()
}

fn dump(records: &[StructuralRecord]) -> (u64, &str) {
    let dump = records
        .iter()
        .find(|r| r.kind == RecordKind::BinaryDump)
        .unwrap();
    (dump.offset, &dump.detail1)
}

#[test]
fn descriptor_and_segments() {
    let mut block = DESCRIPTOR.to_vec();
    block.extend(b"GT\0\0\0\x04");
    block.extend([1, 2, 3, 4]);
    block.extend(NULL_SEGMENT);

    let (records, summary) = analyse(&font_stream(&[&block], true));

    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::Operator, "BeginFontHeader", "0x4F", ""),
            (17, RecordKind::Operator, "ReadFontHeader", "0x50", ""),
            (
                18,
                RecordKind::EmbeddedData,
                "font header data",
                "24 bytes",
                "dataLength",
            ),
            (23, RecordKind::FontHeader, "Format", "0", "Download"),
            (24, RecordKind::FontHeader, "Orientation", "0", "Portrait"),
            (25, RecordKind::FontHeader, "Symbol set", "10U", "PC-8"),
            (
                27,
                RecordKind::FontHeader,
                "Scaling technology",
                "1",
                "TrueType",
            ),
            (28, RecordKind::FontHeader, "Variety", "0", ""),
            (29, RecordKind::FontHeader, "Characters", "3", ""),
            (
                31,
                RecordKind::FontSegment,
                "GT",
                "Global TrueType data",
                "4 bytes, first segment",
            ),
            (
                41,
                RecordKind::FontSegment,
                "null",
                "Null segment",
                "0 bytes",
            ),
            (47, RecordKind::Operator, "EndFontHeader", "0x51", ""),
        ]
    );
    assert!(summary.complete);
}

#[test]
fn segment_header_split_across_blocks() {
    let mut first = DESCRIPTOR.to_vec();
    first.extend(b"GT\0");

    let mut second = b"\0\0\x04".to_vec();
    second.extend([1, 2, 3, 4]);
    second.extend(NULL_SEGMENT);

    let (records, _) = analyse(&font_stream(&[&first, &second], true));

    let segments: Vec<_> = records
        .iter()
        .filter(|r| r.kind == RecordKind::FontSegment)
        .map(|r| (r.offset, &*r.label, &*r.detail2))
        .collect();
    assert_eq!(
        segments,
        [
            (40, "GT", "4 bytes, first segment"),
            (47, "null", "0 bytes"),
        ]
    );
    assert!(warnings(&records).is_empty());
}

#[test]
fn segment_payload_split_across_blocks() {
    let mut first = DESCRIPTOR.to_vec();
    first.extend(b"CP\0\0\0\x05ab");

    let mut second = b"cde".to_vec();
    second.extend(b"VI\0\0\0\0");
    second.extend(NULL_SEGMENT);

    let (records, summary) = analyse(&font_stream(&[&first, &second], true));

    let segments: Vec<_> = records
        .iter()
        .filter(|r| r.kind == RecordKind::FontSegment)
        .map(|r| (&*r.label, &*r.detail1, &*r.detail2))
        .collect();
    assert_eq!(
        segments,
        [
            ("CP", "Copyright", "5 bytes, first segment"),
            ("VI", "Vendor information", "0 bytes"),
            ("null", "Null segment", "0 bytes"),
        ]
    );
    assert!(warnings(&records).is_empty());
    assert!(summary.complete);
}

#[test]
fn unrecognised_format_falls_back_to_binary() {
    let mut first = DESCRIPTOR.to_vec();
    first[0] = 1;

    let (records, _) = analyse(&font_stream(&[&first, &[9, 9, 9, 9]], true));

    assert_eq!(
        warnings(&records),
        [(23, "Unrecognised font header format 1.")]
    );
    assert_eq!(
        rows(&records)[5],
        (
            23,
            RecordKind::BinaryDump,
            "font header data",
            "8 bytes",
            "",
        )
    );
    assert_eq!(
        rows(&records)[8],
        (
            37,
            RecordKind::BinaryDump,
            "font header data",
            "4 bytes",
            "",
        )
    );
    assert!(records.iter().all(|r| r.kind != RecordKind::FontHeader));
}

#[test]
fn unrecognised_segment_type() {
    let mut block = DESCRIPTOR.to_vec();
    block.extend(b"ZZ\0\0\0\x02");
    block.extend([9, 9]);

    let (records, _) = analyse(&font_stream(&[&block], true));

    assert_eq!(
        warnings(&records),
        [(31, "Unrecognised font segment type 0x5A5A.")]
    );
    assert_eq!(dump(&records), (37, "2 bytes"));
}

#[test]
fn short_descriptor() {
    let (records, summary) = analyse(&font_stream(&[&[0, 0, 1, 0x55]], true));

    let warnings = warnings(&records);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, 23);
    assert_eq!(
        warnings[0].1,
        "Font header block of 4 bytes is shorter than its descriptor."
    );
    assert_eq!(dump(&records), (23, "4 bytes"));
    assert!(summary.complete);
}

#[test]
fn data_after_null_segment() {
    let mut block = DESCRIPTOR.to_vec();
    block.extend(NULL_SEGMENT);
    block.extend([0xAA, 0xBB]);

    let (records, _) = analyse(&font_stream(&[&block], true));

    assert_eq!(
        warnings(&records),
        [(37, "Font header data continues after the null segment.")]
    );
    assert_eq!(dump(&records), (37, "2 bytes"));
}

#[test]
fn end_font_header_within_segment() {
    let mut block = DESCRIPTOR.to_vec();
    block.extend(b"GT\0\0\0\x0A");
    block.extend([1, 2, 3, 4]);

    let (records, _) = analyse(&font_stream(&[&block], true));

    let last = &records[records.len() - 2..];
    assert_eq!(
        rows(last),
        [
            (41, RecordKind::Operator, "EndFontHeader", "0x51", ""),
            (
                41,
                RecordKind::Warning,
                "warning",
                "Font header ended before its segments were complete.",
                "",
            ),
        ]
    );
}

#[test]
fn null_segment_with_size() {
    let mut block = DESCRIPTOR.to_vec();
    block.extend([0xFF, 0xFF, 0, 0, 0, 1]);

    let (records, _) = analyse(&font_stream(&[&block], true));

    assert_eq!(warnings(&records), [(31, "Null segment declares 1 bytes.")]);
}

#[test]
fn truncated_font_header() {
    let mut block = DESCRIPTOR.to_vec();
    block.extend(b"GT\0\0\0\x0A");
    block.extend([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    let mut data = font_stream(&[&block], false);
    data.truncate(data.len() - 4);

    let (records, summary) = analyse(&data);

    let warnings = warnings(&records);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, 43);
    assert_eq!(
        warnings[0].1,
        "End of data within font segment data (starting ); 4 bytes outstanding."
    );
    assert!(!summary.complete);
}
