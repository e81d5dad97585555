//! Incremental decoder implementation, for bytes arriving over time.

use alloc::vec::Vec;
use core::mem;

use crate::{
    record::{Options, RecordSink},
    sans::{Decoder, Dialect, Env, Step},
    stats::Statistics,
};

use super::Summary;

/// An analysis pass fed one chunk at a time.
///
/// Bytes left unconsumed by a chunk (a structure split across chunks) are
/// carried and offered again ahead of the next. Statistics accumulate across
/// passes until reset.
#[derive(Debug, Default)]
pub struct Analysis {
    link: Decoder,
    /// Absolute offset of `carry[0]`.
    offset: u64,
    carry: Vec<u8>,
    /// Dialect each pass starts in.
    dialect: Dialect,
    options: Options,
    stats: Statistics,
}

impl Analysis {
    pub fn new(options: Options) -> Self {
        Self::with_statistics(options, Statistics::new())
    }

    /// Continue accumulating into existing statistics.
    pub fn with_statistics(options: Options, stats: Statistics) -> Self {
        Self {
            options,
            stats,
            ..Self::default()
        }
    }

    /// Start each pass in `dialect` rather than PCL 5.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.link = Decoder::with_dialect(dialect);
        self.dialect = dialect;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }

    pub fn into_statistics(self) -> Statistics {
        self.stats
    }

    /// Decode a chunk, returning the number of records produced.
    pub fn feed(&mut self, chunk: &[u8], sink: &mut dyn RecordSink) -> usize {
        if self.carry.is_empty() {
            let (consumed, produced) = self.resume(chunk, false, sink);
            self.carry.extend_from_slice(&chunk[consumed..]);
            produced
        } else {
            let mut carry = mem::take(&mut self.carry);
            carry.extend_from_slice(chunk);
            let (consumed, produced) = self.resume(&carry, false, sink);
            carry.drain(..consumed);
            self.carry = carry;
            produced
        }
    }

    /// End the pass, reporting a structure left incomplete.
    ///
    /// The analysis is ready for another pass afterward.
    pub fn finish(&mut self, sink: &mut dyn RecordSink) -> Summary {
        let carry = mem::take(&mut self.carry);
        let (consumed, _) = self.resume(&carry, true, sink);

        let length = self.offset + (carry.len() - consumed) as u64;

        let mut env = Env::new(&self.options, &mut self.stats, sink);
        let complete = self.link.finish(length, &mut env);

        self.link = Decoder::with_dialect(self.dialect);
        self.offset = 0;

        Summary { length, complete }
    }

    /// Run the decoder over `r`, returning bytes consumed and records produced.
    fn resume(
        &mut self,
        r: &[u8],
        end_of_data: bool,
        sink: &mut dyn RecordSink,
    ) -> (usize, usize) {
        let link = mem::take(&mut self.link);
        let mut env = Env::new(&self.options, &mut self.stats, sink);

        let Step {
            consumed,
            produced,
            link,
        } = link.resume(r, self.offset, end_of_data, &mut env);

        self.link = link;
        self.offset += consumed as u64;

        (consumed, produced)
    }
}
