use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PAGE_VIEW: &str = "page_view";
pub const SCROLL_DEPTH: &str = "scroll_depth";
pub const TIME_ON_PAGE: &str = "time_on_page";
pub const BUTTON_CLICK: &str = "button_click";
pub const FORM_SUBMIT: &str = "form_submit";
pub const QUOTE_REQUEST: &str = "quote_request";

/// One record in the local usage log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    pub path: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Map<String, Value>>,
}

impl TrackedEvent {
    pub fn new(event_type: &str, path: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_type: event_type.to_string(),
            subject_id: None,
            path: path.to_string(),
            timestamp,
            payload: None,
        }
    }

    pub fn with_subject(mut self, subject_id: &str) -> Self {
        self.subject_id = Some(subject_id.to_string());
        self
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.payload
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }
}
