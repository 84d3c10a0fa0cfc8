//! Коды записей BAI2 и их схемы полей.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Поля записи `01` (заголовок файла).
pub const FILE_HEADER_FIELDS: &[&str] = &[
    "record_code",
    "sender_id",
    "receiver_id",
    "creation_date",
    "creation_time",
    "file_id",
    "version",
    "physical_record_length",
];

/// Поля записи `02` (заголовок группы).
pub const GROUP_HEADER_FIELDS: &[&str] =
    &["record_code", "file_id", "group_id", "creation_date", "creation_time", "currency"];

/// Поля записи `03` (идентификатор счёта).
pub const ACCOUNT_FIELDS: &[&str] =
    &["record_code", "account_number", "currency", "type_code_summary"];

/// Поля записи `16` (детали транзакции).
pub const TRANSACTION_FIELDS: &[&str] =
    &["record_code", "type_code", "amount", "funds_type", "bank_ref", "customer_ref", "text"];

/// Тип записи BAI2, который мы декодируем.
///
/// Любой другой код (`88`, `49`, `98`, `99`, ...) не ошибка: такая строка
/// просто пропускается, см. [`RecordKind::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    /// `01` — заголовок файла.
    #[serde(rename = "01")]
    FileHeader,
    /// `02` — заголовок группы.
    #[serde(rename = "02")]
    GroupHeader,
    /// `03` — идентификатор счёта.
    #[serde(rename = "03")]
    AccountIdentifier,
    /// `16` — детали транзакции.
    #[serde(rename = "16")]
    TransactionDetail,
}

impl RecordKind {
    /// Все декодируемые типы в порядке кодов.
    pub const ALL: [Self; 4] =
        [Self::FileHeader, Self::GroupHeader, Self::AccountIdentifier, Self::TransactionDetail];

    /// Возвращает двухсимвольный код записи.
    ///
    /// # Пример
    /// ```
    /// use bai2::record::RecordKind;
    /// assert_eq!(RecordKind::TransactionDetail.code(), "16");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FileHeader => "01",
            Self::GroupHeader => "02",
            Self::AccountIdentifier => "03",
            Self::TransactionDetail => "16",
        }
    }

    /// Классифицирует код записи. `None` означает «пропустить строку».
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::FileHeader),
            "02" => Some(Self::GroupHeader),
            "03" => Some(Self::AccountIdentifier),
            "16" => Some(Self::TransactionDetail),
            _ => None,
        }
    }

    /// Упорядоченная схема полей для этого типа.
    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::FileHeader => FILE_HEADER_FIELDS,
            Self::GroupHeader => GROUP_HEADER_FIELDS,
            Self::AccountIdentifier => ACCOUNT_FIELDS,
            Self::TransactionDetail => TRANSACTION_FIELDS,
        }
    }

    /// Имя выходной таблицы (без расширения).
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::FileHeader => "file_header",
            Self::GroupHeader => "groups",
            Self::AccountIdentifier => "accounts",
            Self::TransactionDetail => "transactions",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseError::UnknownRecordCode(s.to_string()))
    }
}
