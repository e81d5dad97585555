//! Slice-based decoder implementation.

use core::mem;

use crate::{
    record::{Options, RecordSink},
    sans::{Decoder, Env},
    stats::Statistics,
};

use super::{Analysis, Summary};

/// Decode every record of a whole stream held in a slice, publishing to a
/// sink and counting into `stats`.
///
/// This method is also re-exported as `prnscope::avec::decode_slice`.
pub fn decode(
    r: &[u8],
    options: &Options,
    stats: &mut Statistics,
    sink: &mut impl RecordSink,
) -> Summary {
    let mut env = Env::new(options, stats, sink);

    let step = Decoder::new().resume(r, 0, true, &mut env);

    // A structure still pending holds the unconsumed tail; it ends the stream.
    let length = r.len() as u64;
    let complete = step.link.finish(length, &mut env);

    Summary { length, complete }
}

/// Decode a stream supplied as a sequence of chunks.
///
/// The records produced are identical to those of [`decode`] over the
/// concatenated chunks.
pub fn decode_chunks<'c>(
    chunks: impl IntoIterator<Item = &'c [u8]>,
    options: &Options,
    stats: &mut Statistics,
    sink: &mut impl RecordSink,
) -> Summary {
    let mut analysis = Analysis::with_statistics(options.clone(), mem::take(stats));

    for chunk in chunks {
        analysis.feed(chunk, sink);
    }

    let summary = analysis.finish(sink);
    *stats = analysis.into_statistics();

    summary
}
