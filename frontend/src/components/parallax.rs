use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::parallax::{frame, Layout, ParallaxConfig, Range};

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or((60.0, -60.0))]
    pub translate_y: (f64, f64),
    #[prop_or((1.0, 1.0))]
    pub opacity: (f64, f64),
    #[prop_or((1.0, 1.0))]
    pub scale: (f64, f64),
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let (width, height) = use_window_size();
    let layout = use_state(|| None::<Layout>);

    // Geometry only changes with the viewport, so measure on resize.
    {
        let node = node.clone();
        let layout = layout.clone();
        use_effect_with_deps(
            move |_| {
                if let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) {
                    let rect = element.get_bounding_client_rect();
                    let page_y = window.scroll_y().unwrap_or(0.0);
                    layout.set(Some(Layout {
                        element_top: rect.top() + page_y,
                        element_height: rect.height(),
                        viewport_height: window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0),
                    }));
                }
                || ()
            },
            (width as i64, height as i64),
        );
    }

    let config = ParallaxConfig {
        translate_y: Range::new(props.translate_y.0, props.translate_y.1),
        opacity: Range::new(props.opacity.0, props.opacity.1),
        scale: Range::new(props.scale.0, props.scale.1),
    };
    let style = layout.as_ref().map(|l| frame(&config, scroll_y, l).style());

    html! {
        <div ref={node} class={classes!("parallax", props.class.clone())}>
            <div class="parallax-inner" {style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
