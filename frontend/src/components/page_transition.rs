use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::transition::{Phase, TransitionMachine, TransitionVariant};

#[derive(Properties, PartialEq)]
pub struct PageTransitionProps {
    /// Current route path; a change starts a transition.
    pub path: AttrValue,
    /// Renders the content for a path.
    pub render: Callback<String, Html>,
    #[prop_or(TransitionVariant::Fade)]
    pub variant: TransitionVariant,
    /// Keep the old page mounted until its exit animation has finished.
    #[prop_or(true)]
    pub defer: bool,
    #[prop_or(300)]
    pub exit_ms: u32,
    #[prop_or(400)]
    pub enter_ms: u32,
}

#[derive(Default)]
struct Timers {
    exit: Option<Timeout>,
    enter: Option<Timeout>,
}

#[function_component(PageTransition)]
pub fn page_transition(props: &PageTransitionProps) -> Html {
    let machine = use_mut_ref(|| TransitionMachine::new(props.path.to_string(), props.defer));
    let timers = use_mut_ref(Timers::default);
    let update = use_force_update();

    {
        let machine = machine.clone();
        let timers = timers.clone();
        let update = update.clone();
        let exit_ms = props.exit_ms;
        let enter_ms = props.enter_ms;
        use_effect_with_deps(
            move |path: &AttrValue| {
                let started = machine.borrow_mut().navigate(path.to_string());
                let phase = machine.borrow().phase();
                if started || phase == Phase::Entering {
                    update.force_update();
                    let mut slots = timers.borrow_mut();
                    slots.enter = None;
                    match phase {
                        Phase::Exiting => {
                            slots.exit = Some(exit_timer(machine.clone(), timers.clone(), update, exit_ms, enter_ms));
                        }
                        Phase::Entering => {
                            slots.exit = None;
                            slots.enter = Some(enter_timer(machine.clone(), update, enter_ms));
                        }
                        Phase::Idle => {}
                    }
                }
                || ()
            },
            props.path.clone(),
        );
    }

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let mut slots = timers.borrow_mut();
                    slots.exit.take();
                    slots.enter.take();
                }
            },
            (),
        );
    }

    let machine = machine.borrow();
    // Without deferral the incoming page renders straight away.
    let shown = if props.defer {
        machine.displayed().clone()
    } else {
        props.path.to_string()
    };

    html! {
        <div class={machine.class(props.variant)} key={shown.clone()}>
            { props.render.emit(shown) }
        </div>
    }
}

fn exit_timer(
    machine: Rc<RefCell<TransitionMachine<String>>>,
    timers: Rc<RefCell<Timers>>,
    update: UseForceUpdateHandle,
    exit_ms: u32,
    enter_ms: u32,
) -> Timeout {
    Timeout::new(exit_ms, move || {
        machine.borrow_mut().exit_complete();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        update.force_update();
        let enter = enter_timer(machine.clone(), update, enter_ms);
        timers.borrow_mut().enter = Some(enter);
    })
}

fn enter_timer(
    machine: Rc<RefCell<TransitionMachine<String>>>,
    update: UseForceUpdateHandle,
    enter_ms: u32,
) -> Timeout {
    Timeout::new(enter_ms, move || {
        machine.borrow_mut().enter_complete();
        update.force_update();
    })
}
