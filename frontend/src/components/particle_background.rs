use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Date, Math};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::particles::ParticleField;

const FRAME_MS: u32 = 33;

#[derive(Properties, PartialEq)]
pub struct ParticleBackgroundProps {
    #[prop_or(60)]
    pub count: usize,
    #[prop_or(AttrValue::from("30, 144, 255"))]
    pub rgb: AttrValue,
}

#[function_component(ParticleBackground)]
pub fn particle_background(props: &ParticleBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(count, rgb): &(usize, AttrValue)| {
                let rgb = rgb.clone();
                let mut interval = None;
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let width = canvas.client_width().max(1) as u32;
                    let height = canvas.client_height().max(1) as u32;
                    canvas.set_width(width);
                    canvas.set_height(height);

                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

                    if let Some(context) = context {
                        let field = Rc::new(RefCell::new(ParticleField::seeded(
                            *count,
                            f64::from(width),
                            f64::from(height),
                            Math::random,
                        )));
                        let last = Rc::new(RefCell::new(Date::now()));
                        interval = Some(Interval::new(FRAME_MS, move || {
                            let now = Date::now();
                            let dt = (now - *last.borrow()) / 1000.0;
                            *last.borrow_mut() = now;

                            let mut field = field.borrow_mut();
                            let (w, h) = (canvas.client_width(), canvas.client_height());
                            if w > 0 && h > 0 && (w as f64 != field.width || h as f64 != field.height) {
                                canvas.set_width(w as u32);
                                canvas.set_height(h as u32);
                                field.resize(f64::from(w), f64::from(h));
                            }
                            field.step(dt);
                            draw(&context, &field, &rgb);
                        }));
                    }
                }
                move || drop(interval)
            },
            (props.count, props.rgb.clone()),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-background" aria-hidden="true"></canvas>
    }
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField, rgb: &str) {
    context.clear_rect(0.0, 0.0, field.width, field.height);
    for p in &field.particles {
        context.begin_path();
        if context.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU).is_err() {
            continue;
        }
        context.set_fill_style_str(&format!("rgba({}, {:.2})", rgb, p.alpha));
        context.fill();
    }
}
