//! Trips (OD demand) dialect reader.
//!
//! # Format
//!
//! ```text
//! <NUMBER OF ZONES> 24
//! <TOTAL OD FLOW> 360600.0
//! <END OF METADATA>
//!
//! Origin  1
//!     1 :      0.0;     2 :    100.0;     3 :    100.0;
//!     4 :    500.0;
//! Origin  2
//!     …
//! ```
//!
//! # State machine
//!
//! ```text
//!            "Origin <id>"                 "Origin <id>"
//! Seeking ───────────────► Collecting ◄──────────────┐
//!                              │                     │
//!                              └─────────────────────┘
//! ```
//!
//! While collecting, every token of the block belongs to one flat stream
//! grouped in threes (`destination`, `:`, `demand;`).  The position inside
//! the group is a running counter over the whole block, so a triplet may be
//! split across lines.  A block that closes mid-triplet is a format error.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};

use tn_core::{parse_id, DemandMap, Metadata, TripEntry, ZoneId};

use crate::{ReadError, ReadResult};

/// Keyword opening an origin block.
pub const ORIGIN: &str = "Origin";

/// Tokens per `destination : demand;` group.
const GROUP: usize = 3;

/// Middle token of every group.
const SEPARATOR: &str = ":";

// ── Parser state ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No `Origin` header seen yet; tokens are discarded.
    Seeking,
    /// Inside an origin block.
    Collecting,
}

/// Explicit per-line parser state.
#[derive(Clone, Debug, PartialEq)]
pub struct ParserState {
    pub mode:           Mode,
    pub current_origin: Option<ZoneId>,
    /// Tokens consumed in the current block (running, never reset per line).
    block_tokens:       usize,
    /// Line of the active `Origin` header, for error reporting.
    block_line:         usize,
    /// Destination of the triplet in progress.
    pending:            Option<ZoneId>,
}

impl ParserState {
    pub fn new() -> Self {
        Self {
            mode:           Mode::Seeking,
            current_origin: None,
            block_tokens:   0,
            block_line:     0,
            pending:        None,
        }
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Line-at-a-time trips parser.  Feed lines with
/// [`feed_line`](Self::feed_line), then call [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TripsParser {
    state:    ParserState,
    metadata: Metadata,
    demand:   DemandMap,
}

impl TripsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Process one line.  `line_no` is 1-based and only used in errors.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> ReadResult<()> {
        let mut tokens = line.split_whitespace().peekable();

        let Some(&first) = tokens.peek() else {
            // Blank lines never touch the group counter.
            return Ok(());
        };

        if first == ORIGIN {
            tokens.next();
            let id = tokens
                .next()
                .ok_or_else(|| ReadError::format(line_no, "`Origin` without a zone id"))?;
            let origin = parse_id(id)
                .map(ZoneId)
                .map_err(|_| ReadError::format(line_no, format!("origin {id:?} is not a zone id")))?;
            return self.open_block(line_no, origin);
        }

        match self.state.mode {
            Mode::Seeking => {
                self.metadata.absorb_line(line);
                Ok(())
            }
            Mode::Collecting => {
                for token in tokens {
                    self.consume(line_no, token)?;
                }
                Ok(())
            }
        }
    }

    /// Close the last block and return the decoded file.
    pub fn finish(mut self) -> ReadResult<TripsFile> {
        self.close_block()?;
        Ok(TripsFile { metadata: self.metadata, demand: self.demand })
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn open_block(&mut self, line_no: usize, origin: ZoneId) -> ReadResult<()> {
        self.close_block()?;
        if !self.demand.ensure_origin(origin) {
            warn!("line {line_no}: repeated header for {origin}; appending to its block");
        }
        self.state = ParserState {
            mode:           Mode::Collecting,
            current_origin: Some(origin),
            block_tokens:   0,
            block_line:     line_no,
            pending:        None,
        };
        Ok(())
    }

    fn close_block(&mut self) -> ReadResult<()> {
        if self.state.mode != Mode::Collecting {
            return Ok(());
        }
        let n = self.state.block_tokens;
        if n % GROUP != 0 {
            let origin = self.state.current_origin.map_or(0, |o| o.0);
            return Err(ReadError::format(
                self.state.block_line,
                format!("block of origin {origin} holds {n} tokens, not a multiple of {GROUP}"),
            ));
        }
        Ok(())
    }

    fn consume(&mut self, line_no: usize, token: &str) -> ReadResult<()> {
        let slot = self.state.block_tokens % GROUP;
        self.state.block_tokens += 1;

        match slot {
            0 => {
                let dest = parse_id(token).map_err(|_| {
                    ReadError::format(line_no, format!("destination {token:?} is not a zone id"))
                })?;
                self.state.pending = Some(ZoneId(dest));
            }
            1 => {
                if token != SEPARATOR {
                    return Err(ReadError::format(
                        line_no,
                        format!("expected {SEPARATOR:?} after destination, found {token:?}"),
                    ));
                }
            }
            _ => {
                let value = token.trim_end_matches(';');
                let demand: f64 = value.parse().map_err(|_| {
                    ReadError::format(line_no, format!("demand {token:?} is not a number"))
                })?;
                if let (Some(origin), Some(dest)) =
                    (self.state.current_origin, self.state.pending.take())
                {
                    self.demand.push(origin, dest, demand);
                }
            }
        }
        Ok(())
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// A decoded trips file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripsFile {
    pub metadata: Metadata,
    /// Origins with an `Origin` header, including empty ones.
    pub demand:   DemandMap,
}

impl TripsFile {
    /// Flattened entry stream (origins ascending, destinations in file order).
    pub fn entries(&self) -> impl Iterator<Item = TripEntry> + '_ {
        self.demand.entries()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a trips file from disk.
pub fn read_trips(path: &Path) -> ReadResult<TripsFile> {
    let file = File::open(path)?;
    let trips = read_trips_reader(file)?;
    info!(
        "read {} OD pairs over {} origins from {}",
        trips.demand.pair_count(),
        trips.demand.origin_count(),
        path.display()
    );
    Ok(trips)
}

/// Like [`read_trips`] but accepts any `Read` source.
pub fn read_trips_reader<R: Read>(reader: R) -> ReadResult<TripsFile> {
    let mut parser = TripsParser::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        parser.feed_line(i + 1, &line?)?;
    }
    let trips = parser.finish()?;

    if let Some(declared) = trips.metadata.total_od_flow() {
        debug!("header total OD flow {declared}, parsed {}", trips.demand.total());
    }
    Ok(trips)
}
