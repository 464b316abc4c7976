use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::tracking::scroll_depth::{scroll_percent, ScrollDepth};
use crate::tracking::tracker::Tracker;
use crate::tracking::visit::PageVisit;

/// Logs a page view, scroll-depth milestones and time on page for `path`.
/// `None` tracks nothing (used while the page is being redirected).
///
/// A new path counts as a new visit: milestones reset and the previous
/// visit's time on page is written when it ends. Closing or reloading the
/// tab ends the visit through `pagehide`, since the effect cleanup never
/// runs then.
#[hook]
pub fn use_page_tracking(path: Option<String>) {
    use_effect_with_deps(
        move |path: &Option<String>| {
            let Some(path) = path.clone() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };

            let started = Utc::now();
            let tracker = Rc::new(Tracker::browser());
            tracker.page_view(&path, started);

            let visit = Rc::new(RefCell::new(PageVisit::new(started)));
            let depth = Rc::new(RefCell::new(ScrollDepth::new()));
            let window = web_sys::window();

            let scroll_callback = {
                let tracker = tracker.clone();
                let path = path.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let Some(window) = web_sys::window() else { return };
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let document_height = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map(|e| f64::from(e.scroll_height()))
                        .unwrap_or(0.0);

                    let percent = scroll_percent(scroll_y, viewport, document_height);
                    for milestone in depth.borrow_mut().update(percent) {
                        tracker.scroll_depth(&path, milestone, Utc::now());
                    }
                })
            };

            // Shared by pagehide and teardown; `PageVisit` keeps it to one record.
            let end_visit = move || {
                let now = Utc::now();
                if let Some(seconds) = visit.borrow_mut().end(now) {
                    tracker.time_on_page(&path, seconds, now);
                }
            };
            let pagehide_callback = Closure::<dyn FnMut()>::new(end_visit.clone());

            let listeners = [("scroll", scroll_callback), ("pagehide", pagehide_callback)];
            if let Some(window) = &window {
                for (event, callback) in &listeners {
                    if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                        log::warn!("Failed to attach {} listener: {:?}", event, e);
                    }
                }
            }

            Box::new(move || {
                if let Some(window) = &window {
                    for (event, callback) in &listeners {
                        let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                    }
                }
                end_visit();
            }) as Box<dyn FnOnce()>
        },
        path,
    );
}
