//! Модуль ошибок разбора BAI2.

use thiserror::Error;

use crate::{
    decoder::DecodeError,
    record::{AmountError, RecordKind},
};

/// Главная ошибка разбора BAI2-файла.
///
/// Нераспознанный код записи ошибкой не является: такие строки
/// пропускаются без следа в выходной последовательности.
#[derive(Debug, Error)]
pub enum ParseError {
    // === Ошибки источника ===
    /// Источник не удалось открыть или прочитать.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    // === Ошибки записей ===
    /// Сумма транзакции (запись 16) не является целым или десятичным числом.
    #[error("malformed amount '{raw}' at line {line}: {content}")]
    MalformedAmount {
        /// Номер физической строки (1-based).
        line: usize,
        /// Исходное значение поля amount.
        raw: String,
        /// Содержимое строки после удаления терминатора.
        content: String,
        /// Причина отказа.
        #[source]
        reason: AmountError,
    },

    /// Строка не является кодом записи BAI2, который мы разбираем.
    #[error("unknown record code '{0}'")]
    UnknownRecordCode(String),

    // === Ошибки вывода ===
    /// Запись передана writer'у чужой таблицы.
    #[error("record kind mismatch: table expects {expected:?}, got {actual:?}")]
    KindMismatch {
        /// Тип записей таблицы.
        expected: RecordKind,
        /// Тип полученной записи.
        actual: RecordKind,
    },

    /// Ошибка записи в выходной поток.
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),

    /// Ошибка записи CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// Номер строки, к которой относится ошибка (если есть).
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedAmount { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Привязывает ошибку декодера к номеру физической строки.
    pub(crate) fn at_line(err: DecodeError, line: usize) -> Self {
        match err {
            DecodeError::MalformedAmount { raw, line: content, reason } => {
                Self::MalformedAmount { line, raw, content, reason }
            }
        }
    }
}

/// Удобный alias для Result с ParseError.
pub type ParseResult<T> = Result<T, ParseError>;
