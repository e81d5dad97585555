use prnscope::{
    avec::{self, RecordKind, StructuralRecord},
    record::Options,
    sans::{Decoder, Dialect, Env, PendingKind},
    stats::{StatKey, Statistics},
};

/// A little-endian stream: a 16-byte header, then `body`.
fn stream(body: &[u8]) -> Vec<u8> {
    let mut data = b"( HP-PCL XL;2;0\n".to_vec();
    data.extend_from_slice(body);
    data
}

fn analyse_with(data: &[u8], options: &Options) -> (Vec<StructuralRecord>, Statistics) {
    let mut records = Vec::new();
    let mut stats = Statistics::new();
    avec::decode_slice(data, options, &mut stats, &mut records);
    (records, stats)
}

fn analyse(data: &[u8]) -> Vec<StructuralRecord> {
    analyse_with(data, &Options::default()).0
}

fn rows(records: &[StructuralRecord]) -> Vec<(u64, RecordKind, &str, &str, &str)> {
    records
        .iter()
        .map(|r| (r.offset, r.kind, &*r.label, &*r.detail1, &*r.detail2))
        .collect()
}

#[test]
fn scalar_and_vector_values() {
    let xy = [0xD1, 0x10, 0x00, 0x20, 0x00];
    let real = [0xC5, 0x00, 0x00, 0xC0, 0x3F];
    let sint = [0xC3, 0xFF, 0xFF];
    let ubox = [0xE0, 1, 2, 3, 4];
    let body = [&xy[..], &real[..], &sint[..], &ubox[..]].concat();

    let records = analyse(&stream(&body));

    assert_eq!(
        rows(&records),
        [
            (
                0,
                RecordKind::StreamHeader,
                "little-endian binding",
                "HP-PCL XL;2;0",
                "",
            ),
            (16, RecordKind::DataType, "uint16_xy", "16, 32", ""),
            (21, RecordKind::DataType, "real32", "1.5", ""),
            (26, RecordKind::DataType, "sint16", "-1", ""),
            (29, RecordKind::DataType, "ubyte_box", "1, 2, 3, 4", ""),
        ]
    );
}

#[test]
fn big_endian_values() {
    let mut data = b") HP-PCL XL;2;0\n".to_vec();
    data.extend([0xC1, 0x01, 0x02, 0xF9, 0x00, 0x2C]);

    let records = analyse(&data);
    assert_eq!(records[1].detail1, "258");
    assert_eq!(
        rows(&records)[2],
        (19, RecordKind::Attribute, "ROP3", "attr_uint16 0x002C", "")
    );
}

#[test]
fn big_endian_lengths() {
    let mut data = b") HP-PCL XL;2;0\n".to_vec();
    data.extend([0xC8, 0xC1, 0x00, 0x02, b'h', b'i']);
    data.extend([0x5C, 0xFA, 0x00, 0x00, 0x00, 0x03, 1, 2, 3, 0x42]);

    let records = analyse(&data);
    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::DataType, "ubyte_array", "2 elements", ""),
            (20, RecordKind::ArrayRow, "ubyte", "104 105", "hi"),
            (22, RecordKind::Operator, "ReadStream", "0x5C", ""),
            (
                23,
                RecordKind::EmbeddedData,
                "stream data",
                "3 bytes",
                "dataLength",
            ),
            (31, RecordKind::Operator, "EndSession", "0x42", ""),
        ]
    );
}

#[test]
fn ubyte_array_rows() {
    let mut body = vec![0xC8, 0xC0, 20];
    body.extend_from_slice(b"ABCDEFGHIJKLMNOPQRST");
    body.push(0x43);

    let records = analyse(&stream(&body));
    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::DataType, "ubyte_array", "20 elements", ""),
            (
                19,
                RecordKind::ArrayRow,
                "ubyte",
                "65 66 67 68 69 70 71 72 73 74 75 76 77 78 79 80",
                "ABCDEFGHIJKLMNOP",
            ),
            (35, RecordKind::ArrayRow, "ubyte", "81 82 83 84", "QRST"),
            (39, RecordKind::Operator, "BeginPage", "0x43", ""),
        ]
    );
}

#[test]
fn uint16_array_rows() {
    let records = analyse(&stream(&[0xC9, 0xC1, 0x02, 0x00, 0x01, 0x00, 0x02, 0x00]));

    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::DataType, "uint16_array", "2 elements", ""),
            (20, RecordKind::ArrayRow, "uint16", "1 2", ""),
        ]
    );
}

#[test]
fn array_length_must_be_unsigned() {
    let records = analyse(&stream(&[0xC8, 0xC3, 0x01, 0x00]));

    assert_eq!(
        rows(&records)[1..],
        [
            (
                16,
                RecordKind::Warning,
                "warning",
                "Array length has type tag 0xC3.",
                "",
            ),
            (17, RecordKind::DataType, "sint16", "1", ""),
        ]
    );
}

#[test]
fn attributes() {
    let (records, stats) = analyse_with(&stream(&[0xF8, 0x01, 0xF8, 0x2C]), &Options::default());

    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::Attribute, "Unknown", "attr_ubyte 0x01", ""),
            (18, RecordKind::Attribute, "ROP3", "attr_ubyte 0x2C", ""),
        ]
    );
    assert_eq!(stats.counts(StatKey::XlUnknownAttribute).total, 1);
    assert_eq!(stats.counts(StatKey::XlAttribute(44)).total, 1);
}

#[test]
fn reserved_tags() {
    let (records, stats) = analyse_with(&stream(&[0x45, 0x20, 0x42]), &Options::default());

    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::Warning, "warning", "Unknown tag 0x45.", ""),
            (18, RecordKind::Operator, "EndSession", "0x42", ""),
        ]
    );
    assert_eq!(stats.counts(StatKey::XlUnknownTag).total, 1);
}

#[test]
fn embedded_image_data() {
    let body = [0xB0, 0xB1, 0xFB, 0x04, 1, 2, 3, 4, 0xB2];
    let options = Options {
        show_binary: true,
        ..Options::default()
    };
    let (records, stats) = analyse_with(&stream(&body), &options);

    assert_eq!(
        rows(&records)[1..],
        [
            (16, RecordKind::Operator, "BeginImage", "0xB0", ""),
            (17, RecordKind::Operator, "ReadImage", "0xB1", ""),
            (
                18,
                RecordKind::EmbeddedData,
                "image data",
                "4 bytes",
                "dataLengthByte",
            ),
            (20, RecordKind::DumpRow, "", "01 02 03 04", "...."),
            (24, RecordKind::Operator, "EndImage", "0xB2", ""),
        ]
    );

    let begin = stats.counts(StatKey::XlTag(0xB0));
    assert_eq!((begin.parent, begin.total), (1, 1));
    assert_eq!(stats.counts(StatKey::XlTag(0xB1)).child, 1);
    assert_eq!(stats.counts(StatKey::XlTag(0xFB)).child, 1);
    assert_eq!(stats.counts(StatKey::XlTag(0xB2)).child, 1);
}

#[test]
fn embedded_data_length_is_four_bytes() {
    let mut body = vec![0x5C, 0xFA, 0x03, 0x00, 0x00, 0x00];
    body.extend_from_slice(b"abc");
    body.push(0x42);

    let records = analyse(&stream(&body));
    assert_eq!(
        rows(&records)[2..],
        [
            (
                17,
                RecordKind::EmbeddedData,
                "stream data",
                "3 bytes",
                "dataLength",
            ),
            (25, RecordKind::Operator, "EndSession", "0x42", ""),
        ]
    );
}

#[test]
fn universal_exit_returns_to_pjl() {
    let mut body = b"\x1b%-12345X".to_vec();
    body.extend_from_slice(b"@PJL EOJ\n");

    let records = analyse(&stream(&body));
    assert_eq!(
        rows(&records)[1..],
        [
            (
                16,
                RecordKind::EscapeSequence,
                "ESC%-12345X",
                "Universal exit language",
                "",
            ),
            (25, RecordKind::Pjl, "@PJL", "EOJ", ""),
        ]
    );
}

#[test]
fn stray_escape_is_an_unknown_tag() {
    let records = analyse(&stream(b"\x1b%-1X"));

    assert_eq!(records[1].detail1, "Unknown tag 0x1B.");
    assert_eq!(records[1].offset, 16);
}

#[test]
fn ascii_binding_is_reported() {
    let records = analyse(b"\x1b%-12345X@PJL ENTER LANGUAGE=PCLXL\n' HP-PCL XL;2;0\n");

    assert_eq!(records[2].label, "ASCII binding");
    assert_eq!(records[3].detail1, "ASCII stream binding is not supported.");
}

#[test]
fn array_count_deficit_is_exact() {
    let options = Options::default();
    let mut stats = Statistics::new();
    let mut records: Vec<StructuralRecord> = Vec::new();
    let mut env = Env::new(&options, &mut stats, &mut records);

    let step = Decoder::with_dialect(Dialect::Xl).resume(&[0xC9], 0, false, &mut env);
    assert_eq!(step.consumed, 0);
    assert_eq!(step.link.pending_kind(), PendingKind::XlTag);
    assert_eq!(step.link.header_deficit(), 2);

    let step = Decoder::with_dialect(Dialect::Xl).resume(&[0xC9, 0xC1, 0x02], 0, false, &mut env);
    assert_eq!(step.consumed, 0);
    assert_eq!(step.link.header_deficit(), 1);
    assert!(step.link.is_backtracking());
    assert_eq!(step.link.echo_prefix(), [0xC9, 0xC1]);

    let step = step.link.resume(&[0xC9, 0xC1, 0x02, 0x00], 0, false, &mut env);
    assert_eq!(step.consumed, 4);
    assert_eq!(step.link.pending_kind(), PendingKind::AttributeArray);
    assert_eq!(step.link.payload_remaining(), 4);
    assert!(!step.link.is_backtracking());
    assert_eq!(step.produced, 1);
}
