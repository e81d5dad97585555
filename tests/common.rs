#![cfg(feature = "std")]

use std::{
    io::{self, Read},
    path::Path,
};

use csv::ReaderBuilder;
use prnscope::{
    avec::{RecordSink, StructuralRecord, reader},
    record::{COLUMNS, Options, render_row},
    stats::{StatKey, Statistics},
    tables::sequences::{self, NONE},
};

#[test]
fn decode_slice_letter() {
    const PATH: &str = "fixtures/letter.prn";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let summary = prnscope::avec::decode_slice(
        &data,
        &Options::default(),
        &mut Statistics::new(),
        &mut validator,
    );
    validator.done();
    assert!(summary.complete);
    assert_eq!(summary.length, data.len() as u64);
}

#[test]
fn decode_slice_font_download() {
    const PATH: &str = "fixtures/font-download.pxl";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let summary = prnscope::avec::decode_slice(
        &data,
        &Options::default(),
        &mut Statistics::new(),
        &mut validator,
    );
    validator.done();
    assert!(summary.complete);
}

#[test]
fn decode_reader_letter() {
    const PATH: &str = "fixtures/letter.prn";
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let options = Options {
        read_size: 3,
        ..Options::default()
    };
    let summary =
        prnscope::avec::decode_reader(&mut file, &options, &mut Statistics::new(), &mut validator)
            .unwrap();
    validator.done();
    assert!(summary.complete);
}

#[test]
fn decode_reader_font_download() {
    const PATH: &str = "fixtures/font-download.pxl";
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let options = Options {
        read_size: 5,
        ..Options::default()
    };
    let summary =
        prnscope::avec::decode_reader(&mut file, &options, &mut Statistics::new(), &mut validator)
            .unwrap();
    validator.done();
    assert!(summary.complete);
}

#[test]
fn decode_chunks_font_download() {
    const PATH: &str = "fixtures/font-download.pxl";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    prnscope::avec::decode_chunks(
        data.chunks(1),
        &Options::default(),
        &mut Statistics::new(),
        &mut validator,
    );
    validator.done();
}

#[test]
fn decode_reader_error() {
    struct Unplugged(&'static [u8]);

    impl Read for Unplugged {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::other("unplugged"));
            }
            let n = buf.len().min(self.0.len());
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    let mut records: Vec<StructuralRecord> = Vec::new();
    let mut stats = Statistics::new();
    let result = prnscope::avec::decode_reader(
        &mut Unplugged(b"\x1bE\x1bE"),
        &Options::default(),
        &mut stats,
        &mut records,
    );

    assert!(matches!(result, Err(reader::Error::Io(_))));
    assert_eq!(records.len(), 2);

    let reset = sequences::sequence(b'E', NONE, NONE).0.unwrap();
    assert_eq!(stats.counts(StatKey::PclSequence(reset)).total, 2);
}

/// Checks each record against the next row of a CSV listing.
struct Validator(Vec<Vec<String>>, Options);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .unwrap();

        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let names: Vec<&str> = COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(headers, names);

        let mut expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();
        expected.reverse();

        Self(expected, Options::default())
    }

    fn done(&self) {
        assert!(self.0.is_empty(), "{} rows never produced", self.0.len());
    }
}

impl RecordSink for Validator {
    fn add_record(&mut self, record: StructuralRecord) {
        let expected = self.0.pop().expect("more records than rows");
        assert_eq!(render_row(&record, &self.1), expected);
    }
}
