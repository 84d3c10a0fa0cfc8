//! Потоковый CSV-writer для таблиц записей.
//!
//! Предоставляет [`TableWriter`] для записи строк одного [`RecordKind`]
//! в любой тип, реализующий [`Write`].

use std::io::Write;

use crate::{
    error::{ParseError, ParseResult},
    record::{Record, RecordKind},
};

/// Потоковый writer одной таблицы.
///
/// Колонки таблицы совпадают со схемой [`RecordKind::fields`]. Пустые
/// значения пишутся как пустые строки, колонки никогда не пропускаются.
///
/// # Пример
///
/// ```
/// use bai2::record::{Record, RecordKind};
/// use bai2::writer::TableWriter;
///
/// let mut out = Vec::new();
/// {
///     let mut writer = TableWriter::new(&mut out, RecordKind::AccountIdentifier);
///     writer.write_header().unwrap();
///     writer.write(&Record::from_fields(RecordKind::AccountIdentifier, ["03", "ACC"])).unwrap();
///     writer.flush().unwrap();
/// }
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "record_code,account_number,currency,type_code_summary\n03,ACC,,\n"
/// );
/// ```
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    kind: RecordKind,
    /// Счётчик записанных строк (без заголовка).
    records_written: usize,
    /// Флаг: записан ли заголовок.
    header_written: bool,
}

impl<W: Write> TableWriter<W> {
    /// Создаёт новый writer для таблицы `kind`.
    pub fn new(writer: W, kind: RecordKind) -> Self {
        Self {
            inner: csv::WriterBuilder::new().has_headers(false).from_writer(writer),
            kind,
            records_written: 0,
            header_written: false,
        }
    }

    /// Тип записей этой таблицы.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Записывает строку с именами колонок.
    ///
    /// Может вызываться несколько раз, но заголовок записывается только один раз.
    pub fn write_header(&mut self) -> ParseResult<()> {
        if !self.header_written {
            self.inner.write_record(self.kind.fields())?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Записывает одну запись.
    ///
    /// Запись другого типа отклоняется с [`ParseError::KindMismatch`].
    pub fn write(&mut self, record: &Record) -> ParseResult<()> {
        if record.kind() != self.kind {
            return Err(ParseError::KindMismatch { expected: self.kind, actual: record.kind() });
        }
        self.inner.write_record(record.values())?;
        self.records_written += 1;
        Ok(())
    }

    /// Записывает несколько записей.
    pub fn write_all(&mut self, records: &[Record]) -> ParseResult<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> ParseResult<()> {
        self.inner.flush().map_err(ParseError::Output)
    }

    /// Возвращает количество записанных строк.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Получает ссылку на внутренний writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Извлекает внутренний writer (с предварительным flush).
    pub fn into_inner(self) -> ParseResult<W> {
        self.inner.into_inner().map_err(|e| ParseError::Output(e.into_error()))
    }
}
