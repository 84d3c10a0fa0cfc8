//! Record decoder: one logical BAI2 line in, at most one [`Record`] out.
//!
//! The line is split on `,`, classified by its first field and zipped
//! positionally against the schema of its [`RecordKind`]. Transaction
//! detail records additionally get their `amount` normalized.
//!
//! Lines with a code we do not handle decode to `Ok(None)`.

use thiserror::Error;

use crate::record::{AmountError, Record, RecordKind, normalize_amount};

/// Field delimiter inside a record.
pub const DELIMITER: char = ',';

/// Optional record terminator.
pub const TERMINATOR: char = '/';

/// Failure to decode a classifiable line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The `amount` of a `16` record is neither an integer nor a decimal.
    #[error("malformed amount '{raw}' in '{line}': {reason}")]
    MalformedAmount {
        /// Raw amount field.
        raw: String,
        /// Line the record was decoded from.
        line: String,
        /// Why the amount was rejected.
        #[source]
        reason: AmountError,
    },
}

/// Decodes a single logical line (already trimmed, terminator removed).
///
/// # Examples
///
/// ```
/// use bai2::decoder::decode;
/// use bai2::record::RecordKind;
///
/// let rec = decode("16,409,12345,,REF1,CUST1,desc").unwrap().unwrap();
/// assert_eq!(rec.kind(), RecordKind::TransactionDetail);
/// assert_eq!(rec.get("amount"), Some("123.45"));
///
/// assert!(decode("88,continued text").unwrap().is_none());
/// ```
pub fn decode(line: &str) -> Result<Option<Record>, DecodeError> {
    let mut parts = line.split(DELIMITER).peekable();
    let Some(kind) = parts.peek().copied().and_then(RecordKind::from_code) else {
        return Ok(None);
    };

    let mut record = Record::from_fields(kind, parts);
    if kind == RecordKind::TransactionDetail {
        normalize_transaction(&mut record, line)?;
    }
    Ok(Some(record))
}

fn normalize_transaction(record: &mut Record, line: &str) -> Result<(), DecodeError> {
    let raw = record.get("amount").unwrap_or_default();
    match normalize_amount(raw) {
        Ok(amount) => {
            record.set("amount", amount);
            Ok(())
        }
        Err(reason) => Err(DecodeError::MalformedAmount {
            raw: raw.to_string(),
            line: line.to_string(),
            reason,
        }),
    }
}

/// Rebuilds a logical line from a physical one.
///
/// Trims surrounding whitespace and strips exactly one trailing
/// [`TERMINATOR`]. Returns `None` for blank lines.
///
/// ```
/// use bai2::decoder::logical_line;
///
/// assert_eq!(logical_line("  16,409,1,,,,desc/ \n"), Some("16,409,1,,,,desc"));
/// assert_eq!(logical_line("03,ACC,USD"), Some("03,ACC,USD"));
/// assert_eq!(logical_line("   \r\n"), None);
/// ```
#[must_use]
pub fn logical_line(physical: &str) -> Option<&str> {
    let trimmed = physical.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.strip_suffix(TERMINATOR).unwrap_or(trimmed))
}
