//! # e2e-tests - End-to-end тесты CLI инструмента `bai2-converter`
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `statement.bai2` — полная выписка: два счёта, пустая строка,
//!   записи с терминатором `/` и без него, коды `88`/`49`/`98`/`99`
//! - `malformed.bai2` — выписка с некорректной суммой в четвёртой строке

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
