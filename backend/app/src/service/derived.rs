//! Display values computed from raw device columns.
//!
//! Everything here is a pure function of its inputs. Malformed input degrades to
//! "absent" or "not matching", it never fails the caller.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde_json::Value;

const SECONDS_PER_YEAR: i64 = 31_536_000;
const SECONDS_PER_MONTH: i64 = 2_628_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Device states that can be counted on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Enable,
    Disable,
    /// Not a stored flag: derived from open repair jobs.
    Repair,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Enable => "enable",
            DeviceStatus::Disable => "disable",
            DeviceStatus::Repair => "repair",
        }
    }
}

impl Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enable" => Ok(DeviceStatus::Enable),
            "disable" => Ok(DeviceStatus::Disable),
            "repair" => Ok(DeviceStatus::Repair),
            other => Err(format!("unknown device status: {other}")),
        }
    }
}

pub fn status_label(device_status: Option<&str>) -> &'static str {
    match device_status {
        Some("disable") => "Deprecated",
        Some("enable") => "Normal",
        _ => "Unknown",
    }
}

/// Renders the time elapsed since `start` as "X year(s) Y month(s) Z day(s)".
///
/// Years and months are fixed averages (365 and 30.4375 days), not calendar
/// arithmetic. Zero components are omitted.
pub fn device_age(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(start) = start else {
        return "N/A".to_string();
    };

    let mut seconds = (now - start).num_milliseconds().div_euclid(1000);
    if seconds < 0 {
        return "Invalid date".to_string();
    }

    let years = seconds / SECONDS_PER_YEAR;
    seconds -= years * SECONDS_PER_YEAR;
    let months = seconds / SECONDS_PER_MONTH;
    seconds -= months * SECONDS_PER_MONTH;
    let days = seconds / SECONDS_PER_DAY;

    let parts: Vec<String> = [(years, "year(s)"), (months, "month(s)"), (days, "day(s)")]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| format!("{count} {unit}"))
        .collect();

    if parts.is_empty() {
        "Less than a day".to_string()
    } else {
        parts.join(" ")
    }
}

/// Parses a comma separated id list. Tokens that are not integers become `None`.
pub fn parse_software_ids(software: &str) -> impl Iterator<Item = Option<i32>> + '_ {
    software.split(',').map(|token| token.trim().parse::<i32>().ok())
}

pub fn has_software(software: Option<&str>, software_id: i32) -> bool {
    software
        .map(|list| parse_software_ids(list).any(|id| id == Some(software_id)))
        .unwrap_or(false)
}

/// Per-device mapping from software id to the serial number of that installation.
///
/// Stored as `[{"7":"SN123"}, {"9":"XYZ"}]`. Order is kept so the first entry for
/// an id wins when the column carries duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoftwareSerials(Vec<(i32, String)>);

impl SoftwareSerials {
    /// Lenient parse: absent or malformed JSON yields an empty mapping.
    pub fn parse(software_sn: Option<&str>) -> Self {
        let Some(raw) = software_sn.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };

        match Self::try_parse(raw) {
            Ok(serials) => serials,
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse software_sn JSON");
                Self::default()
            }
        }
    }

    /// Fails only when `raw` is not a JSON array. Entries that are not objects,
    /// keys that are not ids and `null` or nested values are skipped one by one.
    pub fn try_parse(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Value> = serde_json::from_str(raw)?;

        let serials = entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .flatten()
            .filter_map(|(key, value)| {
                let id = key.trim().parse::<i32>().ok()?;
                serial_text(value).map(|serial| (id, serial))
            })
            .collect();

        Ok(Self(serials))
    }

    pub fn get(&self, software_id: i32) -> Option<&str> {
        self.0
            .iter()
            .find(|(id, _)| *id == software_id)
            .map(|(_, serial)| serial.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn serial_text(value: Value) -> Option<String> {
    match value {
        Value::String(serial) => Some(serial),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Serial number recorded for `software_id`, `None` when the mapping lacks it or
/// cannot be parsed. An empty serial is still `Some("")`.
pub fn find_serial(software_sn: Option<&str>, software_id: i32) -> Option<String> {
    SoftwareSerials::parse(software_sn)
        .get(software_id)
        .map(str::to_string)
}

/// Blank strings count as "no value" for display.
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
