use serde::Serialize;
use serde_json::Value;

use super::module::pretty_json;
use crate::utils::health_status_color;

#[derive(Debug, Serialize)]
pub struct HealthField {
    pub key: String,
    pub value: String,
}

/// Souhrn health záznamu pro `/system/health`
#[derive(Debug, Serialize)]
pub struct HealthSummary {
    pub status: Option<String>,
    pub version: Option<String>,
    pub status_color: String,
    pub fields: Vec<HealthField>,
    pub raw_json: String,
    empty: bool,
}

impl HealthSummary {
    pub fn from_record(record: &Value) -> Self {
        let status = record["status"].as_str().map(|s| s.to_string());
        let version = record["version"].as_str().map(|s| s.to_string());

        let fields: Vec<HealthField> = record
            .as_object()
            .map(|map| {
                map.iter()
                    .map(|(key, value)| HealthField {
                        key: key.clone(),
                        value: match value {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            status_color: health_status_color(status.as_deref()).to_string(),
            status,
            version,
            fields,
            raw_json: pretty_json(record),
            empty: record.as_object().is_some_and(|map| map.is_empty()),
        }
    }

    /// Prázdný záznam = zatím nic nenačteno
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}
