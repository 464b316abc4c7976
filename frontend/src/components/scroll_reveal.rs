use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::reveal::{RevealAction, RevealConfig, RevealState, RevealVariant};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(0.1)]
    pub threshold: f64,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(RevealVariant::FadeUp)]
    pub variant: RevealVariant,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in once they scroll into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    // Nothing is hidden until the first client render has committed.
    let mounted = use_state(|| false);

    let config = RevealConfig {
        threshold: props.threshold,
        delay: props.delay,
        variant: props.variant,
        once: props.once,
        duration: props.duration,
    };

    {
        let node = node.clone();
        let visible = visible.clone();
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                mounted.set(true);

                let state = Rc::new(RefCell::new(RevealState::new(config.clone())));
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
                    Rc::new(RefCell::new(None));

                let callback = {
                    let state = state.clone();
                    let pending = pending.clone();
                    let observer_slot = observer_slot.clone();
                    let visible = visible.clone();
                    Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            let action = state
                                .borrow_mut()
                                .observe(entry.intersection_ratio(), entry.is_intersecting());
                            match action {
                                RevealAction::ScheduleShow { delay_ms } => {
                                    let state = state.clone();
                                    let visible = visible.clone();
                                    let observer_slot = observer_slot.clone();
                                    let timeout = Timeout::new(delay_ms, move || {
                                        let mut state = state.borrow_mut();
                                        state.show();
                                        visible.set(state.is_visible());
                                        if state.should_unobserve() {
                                            if let Some(observer) = observer_slot.borrow_mut().take() {
                                                observer.disconnect();
                                            }
                                        }
                                    });
                                    *pending.borrow_mut() = Some(timeout);
                                }
                                RevealAction::Hide => {
                                    pending.borrow_mut().take();
                                    visible.set(false);
                                }
                                RevealAction::Nothing => {}
                            }
                        }
                    })
                };

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(config.clamped_threshold()));

                if let Some(element) = node.cast::<Element>() {
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            *observer_slot.borrow_mut() = Some(observer);
                        }
                        Err(e) => {
                            // no IntersectionObserver: show immediately
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer_slot.borrow_mut().take() {
                        observer.disconnect();
                    }
                    pending.borrow_mut().take();
                    drop(callback);
                }
            },
            config.clone(),
        );
    }

    let style = if *mounted {
        Some(config.style(*visible))
    } else {
        None
    };

    html! {
        <div
            ref={node}
            class={classes!("scroll-reveal", props.variant.class_name(), (*visible).then(|| "is-visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
