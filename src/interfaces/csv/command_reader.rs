use crate::domain::command::Command;
use crate::error::{Error, Result};
use std::io::Read;

/// Reads scripted commands from a CSV source.
///
/// Expects a `type, selection, quantity, amount` header. Whitespace is
/// trimmed and short rows are accepted, so `deposit, , , 1.00` and
/// `vend, soda, 2` both parse.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one command per row.
    ///
    /// A bad row yields an error for that row only; later rows still parse.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(Error::from))
    }
}
