//! Grouping of decoded records into per-kind tables.

use crate::{
    error::ParseResult,
    record::{Record, RecordKind},
};

/// Kinds that make up the default tabular output.
///
/// Group headers are decoded and kept in [`Tables`], but are not part of it.
pub const OUTPUT_KINDS: [RecordKind; 3] =
    [RecordKind::FileHeader, RecordKind::AccountIdentifier, RecordKind::TransactionDetail];

/// Ordered row collections, one per [`RecordKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    file_headers: Vec<Record>,
    group_headers: Vec<Record>,
    accounts: Vec<Record>,
    transactions: Vec<Record>,
}

impl Tables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects a record stream, stopping at the first error.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    ///
    /// use bai2::{reader::parse, record::RecordKind, tables::Tables};
    ///
    /// let input = "01,BANK,CUST/\n03,ACC,USD/\n16,409,100/\n16,475,250/\n";
    /// let tables = Tables::collect(parse(Cursor::new(input))).unwrap();
    ///
    /// assert_eq!(tables.rows(RecordKind::TransactionDetail).len(), 2);
    /// assert_eq!(tables.len(), 4);
    /// ```
    pub fn collect<I>(records: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = ParseResult<Record>>,
    {
        let mut tables = Self::new();
        for record in records {
            tables.push(record?);
        }
        Ok(tables)
    }

    /// Appends a record to the table of its kind.
    pub fn push(&mut self, record: Record) {
        self.rows_mut(record.kind()).push(record);
    }

    /// Rows of one kind, in input order.
    #[must_use]
    pub fn rows(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::FileHeader => &self.file_headers,
            RecordKind::GroupHeader => &self.group_headers,
            RecordKind::AccountIdentifier => &self.accounts,
            RecordKind::TransactionDetail => &self.transactions,
        }
    }

    fn rows_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::FileHeader => &mut self.file_headers,
            RecordKind::GroupHeader => &mut self.group_headers,
            RecordKind::AccountIdentifier => &mut self.accounts,
            RecordKind::TransactionDetail => &mut self.transactions,
        }
    }

    /// Total number of rows across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        RecordKind::ALL.iter().map(|k| self.rows(*k).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<Record> for Tables {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<Record> for Tables {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut tables = Self::new();
        tables.extend(iter);
        tables
    }
}
