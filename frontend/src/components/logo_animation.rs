use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoAnimationProps {
    #[prop_or(AttrValue::from("SHIELDLINE"))]
    pub text: AttrValue,
    /// Seconds between letters.
    #[prop_or(0.06)]
    pub stagger: f64,
}

#[function_component(LogoAnimation)]
pub fn logo_animation(props: &LogoAnimationProps) -> Html {
    html! {
        <span class="logo-animation" aria-label={props.text.clone()}>
            {
                for props.text.chars().enumerate().map(|(i, c)| {
                    let style = format!("animation-delay: {:.2}s;", i as f64 * props.stagger);
                    html! { <span class="logo-letter" aria-hidden="true" {style}>{ c.to_string() }</span> }
                })
            }
            <style>
                {r#"
                .logo-animation { display: inline-flex; letter-spacing: 0.2em; }
                .logo-letter {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(0.6em);
                    animation: logoLetter 0.5s ease-out forwards;
                }
                @keyframes logoLetter {
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </span>
    }
}
