//! Декодированная запись BAI2.

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::RecordKind;

/// Одна декодированная запись: тип и по одному строковому значению на поле схемы.
///
/// Значения хранятся в порядке схемы [`RecordKind::fields`]. Каждое поле
/// схемы присутствует всегда: недостающие хвостовые колонки становятся
/// пустыми строками, лишние отбрасываются.
///
/// # Пример
///
/// ```
/// use bai2::record::{Record, RecordKind};
///
/// let rec = Record::from_fields(RecordKind::AccountIdentifier, ["03", "1234567", "USD"]);
/// assert_eq!(rec.get("account_number"), Some("1234567"));
/// assert_eq!(rec.get("type_code_summary"), Some(""));
/// assert_eq!(rec.get("no_such_field"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    kind: RecordKind,
    values: Vec<String>,
}

impl Record {
    /// Строит запись позиционно по схеме `kind`, дополняя и обрезая `raw`.
    pub fn from_fields<I, S>(kind: RecordKind, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let width = kind.fields().len();
        let mut values: Vec<String> = raw.into_iter().take(width).map(Into::into).collect();
        values.resize(width, String::new());
        Self { kind, values }
    }

    /// Тип записи.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Значение поля `record_code`.
    #[must_use]
    pub fn record_code(&self) -> &str {
        &self.values[0]
    }

    /// Значение поля по имени, `None` если поля нет в схеме.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.values[i].as_str())
    }

    /// Значения в порядке схемы.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Пары `(имя, значение)` в порядке схемы.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.kind.fields().iter().copied().zip(self.values.iter().map(String::as_str))
    }

    pub(crate) fn set(&mut self, name: &str, value: String) {
        if let Some(i) = self.position(name) {
            self.values[i] = value;
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.kind.fields().iter().position(|f| *f == name)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
