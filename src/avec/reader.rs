//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use core::mem;
use std::{
    io::{ErrorKind, Read},
    vec,
};

use thiserror::Error;

use crate::{
    record::{Options, RecordSink},
    stats::Statistics,
};

use super::{Analysis, Summary};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Decode every record of a stream from a reader, publishing to a sink and
/// counting into `stats`.
///
/// Bytes are read in chunks of [`Options::read_size`]. Records published
/// before a read error are kept, as are the statistics counted for them.
///
/// This method is also re-exported as `prnscope::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    r: &mut impl Read,
    options: &Options,
    stats: &mut Statistics,
    sink: &mut impl RecordSink,
) -> Result<Summary, Error> {
    let mut analysis = Analysis::with_statistics(options.clone(), mem::take(stats));

    let fed = feed(r, options.read_size.max(1), &mut analysis, sink);
    let summary = fed.map(|()| analysis.finish(sink));

    *stats = analysis.into_statistics();

    summary
}

fn feed(
    r: &mut impl Read,
    read_size: usize,
    analysis: &mut Analysis,
    sink: &mut impl RecordSink,
) -> Result<(), Error> {
    let mut buf = vec![0; read_size];

    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => Err(err)?,
        };

        analysis.feed(&buf[..n], sink);
    }
}
