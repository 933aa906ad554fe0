use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber<T> {
    String(String),
    Number(T),
}

/// Query strings carry numbers as text; a blank value means "not provided".
pub fn deserialize_optional_number<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr + Deserialize<'de>,
    D: Deserializer<'de>,
    T::Err: Display,
{
    match Option::<StringOrNumber<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("Failed to parse string: {}", e))),
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
    }
}
