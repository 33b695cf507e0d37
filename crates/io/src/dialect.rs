// Output serialization dialect

/// Delimited-text formatting rules, passed explicitly to the writer.
///
/// Quoting is always minimal: a field is quoted only when it contains
/// the delimiter, the quote character or a line break, and embedded
/// quotes are doubled.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
    pub crlf: bool,
}

impl Default for Dialect {
    /// The enriched-match export dialect: `;` fields, `"` quotes,
    /// CRLF line ends.
    fn default() -> Self {
        Self { delimiter: b';', quote: b'"', crlf: true }
    }
}

impl Dialect {
    pub fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(if self.crlf {
                csv::Terminator::CRLF
            } else {
                csv::Terminator::Any(b'\n')
            });
        builder
    }

    /// Reader with the matching parse rules, for reading an export
    /// back (round-trip checks, downstream consumers).
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true);
        builder
    }
}
