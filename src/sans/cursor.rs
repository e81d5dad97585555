//! A cursor over one buffer, owning the continuation state while it runs.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use log::{debug, warn};
use tinyvec::ArrayVec;

use crate::{
    record::{Options, RecordKind, StructuralRecord},
    stats::{Nesting, StatKey},
};

use super::{
    Anomaly,
    link::{Env, LinkData, PendingKind, Step},
};

/// Whether the dispatch loop should decode another structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Suspend,
}

pub(crate) struct Cx<'r, 'e, 'a> {
    r: &'r [u8],
    base: u64,
    pos: usize,
    produced: usize,
    pub(crate) end_of_data: bool,
    pub(crate) link: LinkData,
    env: &'e mut Env<'a>,
}

impl<'r, 'e, 'a> Cx<'r, 'e, 'a> {
    pub(crate) fn new(
        r: &'r [u8],
        base: u64,
        end_of_data: bool,
        link: LinkData,
        env: &'e mut Env<'a>,
    ) -> Self {
        Self {
            r,
            base,
            pos: 0,
            produced: 0,
            end_of_data,
            link,
            env,
        }
    }

    pub(crate) fn into_step(self) -> Step {
        Step {
            consumed: self.pos,
            produced: self.produced,
            link: self.link,
        }
    }

    pub(crate) fn options(&self) -> &'a Options {
        self.env.options
    }

    /// The unconsumed tail of the buffer.
    pub(crate) fn rest(&self) -> &'r [u8] {
        let r: &'r [u8] = self.r;
        &r[self.pos..]
    }

    /// Absolute offset of the next unconsumed byte.
    pub(crate) fn offset(&self) -> u64 {
        self.base + self.pos as u64
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// The next `n` bytes, or the number of bytes missing.
    pub(crate) fn peek(&self, n: usize) -> Result<&'r [u8], usize> {
        let rest = self.rest();
        rest.get(..n).ok_or_else(|| n - rest.len())
    }

    /// The next `N` bytes as an array, or the number of bytes missing.
    pub(crate) fn peek_array<const N: usize>(&self) -> Result<[u8; N], usize> {
        let mut a = [0; N];
        a.copy_from_slice(self.peek(N)?);
        Ok(a)
    }

    pub(crate) fn emit(
        &mut self,
        offset: u64,
        kind: RecordKind,
        label: impl Into<String>,
        detail1: impl Into<String>,
        detail2: impl Into<String>,
    ) {
        self.env.sink.add_record(StructuralRecord {
            offset,
            kind,
            label: label.into(),
            detail1: detail1.into(),
            detail2: detail2.into(),
        });
        self.produced += 1;
    }

    pub(crate) fn warn(&mut self, offset: u64, anomaly: Anomaly) {
        warn!("{offset}: {anomaly}");
        self.emit(
            offset,
            RecordKind::Warning,
            "warning",
            anomaly.to_string(),
            "",
        );
    }

    pub(crate) fn count(&mut self, key: StatKey, nesting: Nesting) {
        self.env.stats.record(key, nesting);
    }

    /// Nesting of a structure that does not itself open a group.
    pub(crate) fn nesting(&self) -> Nesting {
        if self.link.macro_depth > 0 || self.link.xl.group.is_some() {
            Nesting::Child
        } else {
            Nesting::Other
        }
    }

    /// Suspend without consuming the structure starting at the cursor.
    pub(crate) fn backtrack(&mut self, kind: PendingKind, deficit: usize) -> Flow {
        let rest = self.rest();
        debug!(
            "{}: {kind} needs {deficit} more bytes, backtracking over {}",
            self.offset(),
            rest.len()
        );

        let mut echo = ArrayVec::new();
        echo.extend_from_slice(&rest[..rest.len().min(2)]);

        self.link.pending = kind;
        self.link.header_deficit = deficit;
        self.link.backtracking = true;
        self.link.echo_prefix = echo;

        Flow::Suspend
    }

    /// Suspend with payload bytes still owed.
    pub(crate) fn await_payload(&mut self, kind: PendingKind) -> Flow {
        debug!(
            "{}: {kind} owes {} more bytes",
            self.offset(),
            self.link.payload_remaining
        );

        self.link.pending = kind;
        self.link.header_deficit = 0;
        self.link.backtracking = false;
        self.link.echo_prefix.clear();

        Flow::Suspend
    }

    /// Suspend with nothing pending.
    pub(crate) fn idle(&mut self) -> Flow {
        self.link.clear_pending();
        Flow::Suspend
    }
}

/// Render bytes as Latin-1 text, with control bytes as `.`.
pub(crate) fn text(r: &[u8]) -> String {
    r.iter()
        .map(|&b| match b {
            0x00..=0x1F | 0x7F => '.',
            b => char::from(b),
        })
        .collect()
}

/// Render bytes as space-separated hexadecimal pairs.
pub(crate) fn hex(r: &[u8]) -> String {
    r.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
