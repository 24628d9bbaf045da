//! serde helpers for sample timestamps, which are local wall-clock times
//! written as `yyyy-mm-dd HH:MM:SS`.
use chrono::NaiveDateTime;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamp_str: String = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&timestamp_str, TIMESTAMP_FORMAT)
        .map_err(|e| D::Error::custom(format!("Invalid timestamp format: {e}")))
}
