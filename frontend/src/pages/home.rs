use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::RevealVariant;
use crate::components::logo_animation::LogoAnimation;
use crate::components::parallax::Parallax;
use crate::components::particle_background::ParticleBackground;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::shield::Shield;
use crate::content::SERVICES;
use crate::tracking::tracker::track_click;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let on_quote_click = Callback::from(|_: MouseEvent| track_click("hero-quote"));
    let on_services_click = Callback::from(|_: MouseEvent| track_click("hero-services"));

    html! {
        <div class="home-page">
            <header class="hero">
                <ParticleBackground count={70} />
                <div class="hero-content">
                    <Shield size={160} />
                    <h1><LogoAnimation /></h1>
                    <p class="hero-subtitle">
                        {"Security, cleaning and portering for buildings that never close."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Contact} classes="forward-link">
                            <button class="hero-cta" onclick={on_quote_click}>{"Get a Quote"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="forward-link">
                            <button class="secondary-button" onclick={on_services_click}>{"Our Services"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="services-preview">
                <ScrollReveal>
                    <h2>{"One team for your whole building"}</h2>
                    <p>{"Guards, cleaners and porters who know each other, your tenants and your site."}</p>
                </ScrollReveal>
                <div class="card-grid">
                    {
                        for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <ScrollReveal delay={i as f64 * 0.15} variant={RevealVariant::FadeUp}>
                                <Link<Route> to={Route::ServiceDetail { id: service.id }} classes="service-card">
                                    <h3>{ service.name }</h3>
                                    <p>{ service.tagline }</p>
                                </Link<Route>>
                            </ScrollReveal>
                        })
                    }
                </div>
            </section>

            <Parallax translate_y={(80.0, -80.0)} opacity={(0.6, 1.0)} class="parallax-band">
                <div class="band-content">
                    <h2>{"24 / 7 / 365"}</h2>
                    <p>{"Our control room answers every call, every night, including holidays."}</p>
                </div>
            </Parallax>

            <section class="stats">
                <ScrollReveal variant={RevealVariant::Zoom} threshold={0.3}>
                    <div class="stat"><span class="stat-number">{"120+"}</span><span>{"sites protected"}</span></div>
                </ScrollReveal>
                <ScrollReveal variant={RevealVariant::Zoom} threshold={0.3} delay={0.15}>
                    <div class="stat"><span class="stat-number">{"450"}</span><span>{"trained staff"}</span></div>
                </ScrollReveal>
                <ScrollReveal variant={RevealVariant::Zoom} threshold={0.3} delay={0.3}>
                    <div class="stat"><span class="stat-number">{"15"}</span><span>{"years in service"}</span></div>
                </ScrollReveal>
            </section>

            <section class="footer-cta">
                <ScrollReveal variant={RevealVariant::Fade}>
                    <h2>{"Ready when you are"}</h2>
                    <p class="subtitle">{"Tell us about your site and we'll send a tailored proposal within a day."}</p>
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Contact Us"}</button>
                    </Link<Route>>
                </ScrollReveal>
            </section>
        </div>
    }
}
