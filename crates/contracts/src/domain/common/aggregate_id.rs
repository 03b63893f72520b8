use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Тип идентификатора агрегата
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Строковое представление (ключи в DOM, логи)
    fn as_string(&self) -> String;

    /// Парсинг из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}
