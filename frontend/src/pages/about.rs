use yew::prelude::*;

use crate::animation::reveal::RevealVariant;
use crate::components::parallax::Parallax;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::shield::Shield;

const VALUES: [(&str, &str); 3] = [
    ("Reliability", "Every shift covered, every visit logged."),
    ("Discretion", "Our staff are part of your building, not a distraction in it."),
    ("Care", "We train people to notice the small things before they become big ones."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <Parallax translate_y={(30.0, -30.0)} opacity={(1.0, 0.4)}>
                    <Shield size={140} spin=true />
                </Parallax>
                <h1>{"About Shieldline"}</h1>
                <p>{"Founded by a former site supervisor, Shieldline has grown from a single guarding contract into a facilities team trusted by offices, hospitals and residential towers."}</p>
            </section>
            <section class="values">
                {
                    for VALUES.iter().enumerate().map(|(i, (title, text))| html! {
                        <ScrollReveal delay={i as f64 * 0.2} variant={RevealVariant::FadeUp} once={false}>
                            <div class="value-card">
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        </ScrollReveal>
                    })
                }
            </section>
        </div>
    }
}
