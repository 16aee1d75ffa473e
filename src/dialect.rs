//! CSV dialect configuration.
//!
//! A [`Dialect`] fixes the delimiter, quote character, and record terminator
//! for one update operation. Reading and writing go through the same dialect
//! so the published file keeps the structural conventions of the source.

use std::io;

use csv::{Reader, ReaderBuilder, Terminator, Writer, WriterBuilder};

/// Structural conventions of a CSV file.
///
/// Defaults follow RFC 4180: comma delimiter, double-quote quoting, CRLF
/// record terminator. Fields are quoted on output only when they contain
/// the delimiter, the quote character, or a line break.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    delimiter: u8,
    quote: u8,
    terminator: Terminator,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            terminator: Terminator::CRLF,
        }
    }
}

impl Dialect {
    /// Creates a dialect with RFC 4180 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Sets the record terminator used when writing.
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Builds a header-aware reader over `rdr`.
    ///
    /// Readers are strict: every row must have as many fields as the header.
    pub(crate) fn reader<R: io::Read>(&self, rdr: R) -> Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(true)
            .flexible(false)
            .from_reader(rdr)
    }

    /// Builds a writer over `wtr` matching this dialect.
    pub(crate) fn writer<W: io::Write>(&self, wtr: W) -> Writer<W> {
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .terminator(self.terminator)
            .from_writer(wtr)
    }
}
