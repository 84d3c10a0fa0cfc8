//! Модель записей BAI2.
//!
//! [`RecordKind`] задаёт закрытый набор декодируемых типов и их схемы,
//! [`Record`] хранит значения одной строки в порядке схемы, а
//! [`normalize_amount`] приводит сумму транзакции к виду с двумя знаками.

mod amount;
mod kind;
mod types;

pub use amount::{AmountError, normalize_amount, parse_amount};
pub use kind::{
    ACCOUNT_FIELDS, FILE_HEADER_FIELDS, GROUP_HEADER_FIELDS, RecordKind, TRANSACTION_FIELDS,
};
pub use types::Record;
