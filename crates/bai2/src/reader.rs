//! Потоковый reader для записей BAI2.
//!
//! Предоставляет [`RecordReader`] — итератор, который читает записи
//! из любого источника, реализующего [`Read`], по одной физической строке.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use tracing::{debug, trace};

use crate::{
    decoder::{DELIMITER, decode, logical_line},
    error::{ParseError, ParseResult},
    record::Record,
};

/// Потоковый reader для записей BAI2.
///
/// Реализует [`Iterator`]: читает строку, декодирует её и отдаёт запись
/// до чтения следующей. Пустые строки и строки с необрабатываемым кодом
/// поглощаются без вывода.
///
/// После [`ParseError::MalformedAmount`] reader остаётся на следующей
/// строке, так что вызывающий код сам решает: прервать разбор или
/// пропустить запись. После ошибки ввода/вывода итератор завершается.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use bai2::reader::RecordReader;
///
/// let input = "01,BANK,CUST,250101,0800,1,,/\n\n16,409,12345,,REF1,CUST1,desc/\n";
/// let records: Vec<_> = RecordReader::new(Cursor::new(input))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].get("amount"), Some("123.45"));
/// ```
pub struct RecordReader<R> {
    inner: BufReader<R>,
    buf: String,
    /// Счётчик прочитанных физических строк.
    lines_read: usize,
    /// Счётчик выданных записей.
    records_read: usize,
    /// Флаг достижения EOF или ошибки ввода/вывода.
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    /// Создаёт новый reader.
    ///
    /// Входной reader оборачивается в [`BufReader`] для буферизации.
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            buf: String::new(),
            lines_read: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Возвращает количество прочитанных физических строк.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Возвращает количество успешно декодированных записей.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Получает ссылку на внутренний reader.
    #[must_use]
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// Извлекает внутренний reader.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Читает следующую физическую строку в `buf`. `false` на EOF.
    fn read_line(&mut self) -> ParseResult<bool> {
        self.buf.clear();
        let bytes = self.inner.read_line(&mut self.buf)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.lines_read += 1;
        Ok(true)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = ParseResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    debug!(lines = self.lines_read, records = self.records_read, "end of input");
                    return None;
                }
                Err(e) => {
                    self.finished = true; // Источник больше не читается
                    return Some(Err(e));
                }
            }

            let line_no = self.lines_read;
            let Some(line) = logical_line(&self.buf) else {
                trace!(line = line_no, "blank line");
                continue;
            };

            match decode(line) {
                Ok(Some(record)) => {
                    self.records_read += 1;
                    debug!(line = line_no, kind = %record.kind(), "decoded record");
                    return Some(Ok(record));
                }
                Ok(None) => {
                    trace!(line = line_no, code = ?line.split(DELIMITER).next(), "skipping record");
                }
                Err(e) => return Some(Err(ParseError::at_line(e, line_no))),
            }
        }
    }
}

/// Разбирает BAI2-поток. Один проход, без перезапуска.
pub fn parse<R: Read>(source: R) -> RecordReader<R> {
    RecordReader::new(source)
}

/// Открывает файл и возвращает reader по нему.
///
/// Если файл не открывается, ошибка [`ParseError::SourceUnavailable`]
/// возвращается сразу, до чтения первой строки.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<RecordReader<File>> {
    let file = File::open(path)?;
    Ok(RecordReader::new(file))
}
