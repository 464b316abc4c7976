use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShieldProps {
    #[prop_or(180)]
    pub size: u32,
    #[prop_or(false)]
    pub spin: bool,
}

/// Floating shield emblem with a sweeping highlight.
#[function_component(Shield)]
pub fn shield(props: &ShieldProps) -> Html {
    let size = props.size.to_string();
    html! {
        <div class={classes!("shield-emblem", props.spin.then(|| "spin"))}>
            <svg width={size.clone()} height={size} viewBox="0 0 100 120" aria-hidden="true">
                <defs>
                    <linearGradient id="shield-fill" x1="0" y1="0" x2="1" y2="1">
                        <stop offset="0%" stop-color="#1e90ff" />
                        <stop offset="100%" stop-color="#0b2a4a" />
                    </linearGradient>
                </defs>
                <path class="shield-body" d="M50 4 L92 20 V58 C92 86 72 106 50 116 C28 106 8 86 8 58 V20 Z" fill="url(#shield-fill)" />
                <path class="shield-check" d="M30 60 L45 75 L72 44" fill="none" stroke="#ffffff" stroke-width="7" stroke-linecap="round" stroke-linejoin="round" />
                <rect class="shield-shine" x="-60" y="0" width="30" height="120" fill="rgba(255,255,255,0.25)" transform="skewX(-20)" />
            </svg>
            <style>
                {r#"
                .shield-emblem {
                    display: inline-block;
                    animation: shieldFloat 6s ease-in-out infinite;
                    filter: drop-shadow(0 12px 24px rgba(30, 144, 255, 0.35));
                }
                .shield-emblem.spin svg {
                    animation: shieldTurn 12s linear infinite;
                }
                .shield-check {
                    stroke-dasharray: 80;
                    stroke-dashoffset: 80;
                    animation: shieldCheck 1.2s 0.4s ease-out forwards;
                }
                .shield-shine {
                    animation: shieldShine 4s 1.5s ease-in-out infinite;
                }
                @keyframes shieldFloat {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-12px); }
                }
                @keyframes shieldTurn {
                    from { transform: perspective(600px) rotateY(0deg); }
                    to { transform: perspective(600px) rotateY(360deg); }
                }
                @keyframes shieldCheck {
                    to { stroke-dashoffset: 0; }
                }
                @keyframes shieldShine {
                    0% { transform: skewX(-20deg) translateX(0); }
                    60%, 100% { transform: skewX(-20deg) translateX(200px); }
                }
                "#}
            </style>
        </div>
    }
}
