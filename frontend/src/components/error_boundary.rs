use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

/// Swaps the page for a static notice after any uncaught script error.
#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let has_error = use_state(|| false);

    {
        let has_error = has_error.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |event: ErrorEvent| {
                    gloo_console::error!(
                        "Uncaught error:",
                        format!("{} ({}:{})", event.message(), event.filename(), event.lineno())
                    );
                    event.prevent_default();
                    has_error.set(true);
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    if *has_error {
        html! {
            <div class="error-fallback">
                <h1>{"Something went wrong"}</h1>
                <p>{"Please refresh the page. If the problem continues, contact us by phone or email."}</p>
                <a href="/" class="hero-cta">{"Back to home"}</a>
            </div>
        }
    } else {
        html! { <>{ for props.children.iter() }</> }
    }
}
