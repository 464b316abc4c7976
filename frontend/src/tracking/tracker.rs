use chrono::{DateTime, Utc};
use serde_json::Value;

use super::event::{
    TrackedEvent, BUTTON_CLICK, FORM_SUBMIT, PAGE_VIEW, QUOTE_REQUEST, SCROLL_DEPTH, TIME_ON_PAGE,
};
use super::store::{EventStore, LocalStorageStore};
use crate::config;
use crate::forms::validation::QuoteContact;
use crate::quote::{Quote, ServiceTier};

/// Appends usage events to a store. Failures are logged and dropped.
pub struct Tracker<S: EventStore> {
    store: S,
}

impl Tracker<LocalStorageStore> {
    pub fn browser() -> Self {
        Self::new(LocalStorageStore::new(config::EVENTS_STORAGE_KEY))
    }
}

impl<S: EventStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn record(&self, event: TrackedEvent) {
        let event_type = event.event_type.clone();
        if let Err(e) = self.store.append(event) {
            log::warn!("Could not record {} event: {}", event_type, e);
        }
    }

    pub fn page_view(&self, path: &str, now: DateTime<Utc>) {
        self.record(TrackedEvent::new(PAGE_VIEW, path, now));
    }

    pub fn scroll_depth(&self, path: &str, depth: u8, now: DateTime<Utc>) {
        self.record(TrackedEvent::new(SCROLL_DEPTH, path, now).with_field("depth", depth));
    }

    pub fn time_on_page(&self, path: &str, seconds: i64, now: DateTime<Utc>) {
        self.record(TrackedEvent::new(TIME_ON_PAGE, path, now).with_field("seconds", seconds));
    }

    pub fn button_click(&self, path: &str, button_id: &str, now: DateTime<Utc>) {
        self.record(TrackedEvent::new(BUTTON_CLICK, path, now).with_subject(button_id));
    }

    pub fn form_submit(&self, path: &str, form_id: &str, now: DateTime<Utc>) {
        self.record(TrackedEvent::new(FORM_SUBMIT, path, now).with_subject(form_id));
    }

    /// The payload is the computed breakdown plus who asked and for what.
    pub fn quote_request(
        &self,
        path: &str,
        tier: &ServiceTier,
        contact: &QuoteContact,
        quote: &Quote,
        now: DateTime<Utc>,
    ) {
        let mut event = TrackedEvent::new(QUOTE_REQUEST, path, now).with_subject(tier.id);
        if let Ok(Value::Object(breakdown)) = serde_json::to_value(quote) {
            for (key, value) in breakdown {
                event = event.with_field(&key, value);
            }
        }
        let event = event
            .with_field("serviceName", tier.name)
            .with_field("name", contact.name.as_str())
            .with_field("email", contact.email.as_str())
            .with_field("phone", contact.phone.as_str())
            .with_field("company", contact.company.as_str());
        self.record(event);
    }
}

/// Current `location.pathname`, or "/" outside the browser.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Shorthand for click handlers.
pub fn track_click(button_id: &str) {
    Tracker::browser().button_click(&current_path(), button_id, Utc::now());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::store::MemoryStore;
    use crate::quote::find_tier;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap()
    }

    #[test]
    fn each_call_appends_one_record() {
        let tracker = Tracker::new(MemoryStore::new());
        tracker.page_view("/", now());
        tracker.button_click("/", "hero-cta", now());
        tracker.form_submit("/contact", "contact", now());

        let events = tracker.store().load().unwrap();
        let types: Vec<_> = events.iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(types, vec!["page_view", "button_click", "form_submit"]);
        assert_eq!(events[2].subject_id.as_deref(), Some("contact"));
    }

    #[test]
    fn time_on_page_records_whole_seconds() {
        let tracker = Tracker::new(MemoryStore::new());
        tracker.time_on_page("/about", 42, now());

        let events = tracker.store().load().unwrap();
        assert_eq!(events[0].event_type, "time_on_page");
        assert_eq!(events[0].payload.as_ref().unwrap()["seconds"], json!(42));
    }

    #[test]
    fn quote_request_stores_contact_and_breakdown() {
        let tracker = Tracker::new(MemoryStore::new());
        let tier = find_tier("24h").unwrap();
        let contact = QuoteContact {
            name: "Min-ji Park".to_string(),
            email: "minji@example.com".to_string(),
            phone: "010-1234-5678".to_string(),
            company: "Hanbit Tower".to_string(),
        };
        tracker.quote_request("/contact", tier, &contact, &Quote::for_tier(tier), now());

        let stored: Value = serde_json::from_str(&tracker.store().raw().unwrap()).unwrap();
        let record = &stored[0];
        assert_eq!(record["type"], json!("quote_request"));
        assert_eq!(record["subjectId"], json!("24h"));
        assert_eq!(
            record["payload"],
            json!({
                "basePrice": 7_800_000,
                "fixedFee": 151_050,
                "tax": 780_000,
                "total": 8_731_050,
                "serviceName": tier.name,
                "name": "Min-ji Park",
                "email": "minji@example.com",
                "phone": "010-1234-5678",
                "company": "Hanbit Tower",
            })
        );
    }

    #[test]
    fn scroll_depth_carries_milestone() {
        let tracker = Tracker::new(MemoryStore::new());
        tracker.scroll_depth("/blog", 75, now());
        let events = tracker.store().load().unwrap();
        assert_eq!(events[0].payload.as_ref().unwrap()["depth"], json!(75));
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let tracker = Tracker::new(MemoryStore::full());
        tracker.page_view("/", now());
        assert!(tracker.store().raw().is_none());
    }
}
