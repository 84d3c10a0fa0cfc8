//! Библиотека разбора файлов банковских выписок BAI2.
//!
//! Крейт читает BAI2-файл построчно и выдаёт типизированные записи
//! четырёх видов:
//!
//! - **01** — заголовок файла
//! - **02** — заголовок группы
//! - **03** — идентификатор счёта
//! - **16** — детали транзакции (сумма нормализуется до двух знаков)
//!
//! Остальные коды (`88`, `49`, `98`, `99`, ...) пропускаются.
//!
//! # Быстрый старт
//!
//! ```
//! use std::io::Cursor;
//!
//! use bai2::prelude::*;
//!
//! let input = "\
//! 01,BANK,CUST,250101,0800,1,80,2/
//! 03,0123456789,USD,010/
//! 16,409,12345,,REF1,CUST1,desc/
//! 49,12345,2/
//! ";
//!
//! let tables = Tables::collect(parse(Cursor::new(input))).unwrap();
//! let txs = tables.rows(RecordKind::TransactionDetail);
//!
//! assert_eq!(txs.len(), 1);
//! assert_eq!(txs[0].get("amount"), Some("123.45"));
//! assert_eq!(txs[0].get("text"), Some("desc"));
//! ```

pub mod decoder;
pub mod error;
pub mod reader;
pub mod record;
pub mod tables;
pub mod writer;

/// Часто используемые типы одним импортом.
pub mod prelude {
    pub use crate::{
        decoder::{DecodeError, decode},
        error::{ParseError, ParseResult},
        reader::{RecordReader, parse, parse_file},
        record::{Record, RecordKind, normalize_amount},
        tables::{OUTPUT_KINDS, Tables},
        writer::TableWriter,
    };
}
