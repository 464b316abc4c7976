use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;

mod config;
mod content;
mod quote;
mod animation {
    pub mod parallax;
    pub mod particles;
    pub mod reveal;
    pub mod transition;
}
mod tracking {
    pub mod event;
    pub mod scroll_depth;
    pub mod store;
    pub mod tracker;
    pub mod visit;
}
mod forms {
    pub mod contact_form;
    pub mod quote_calculator;
    pub mod validation;
}
mod components {
    pub mod error_boundary;
    pub mod logo_animation;
    pub mod page_tracking;
    pub mod page_transition;
    pub mod parallax;
    pub mod particle_background;
    pub mod scroll_reveal;
    pub mod shield;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod maintenance;
    pub mod not_found;
    pub mod services;
}

use animation::transition::TransitionVariant;
use config::MaintenanceStatus;
use components::{
    error_boundary::ErrorBoundary,
    page_tracking::use_page_tracking,
    page_transition::PageTransition,
};
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    contact::Contact,
    home::Home,
    maintenance::Maintenance,
    not_found::NotFound,
    services::{ServiceDetail, Services},
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    ServiceDetail { id: u32 },
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// While in maintenance every page other than the root redirects there.
pub fn gate(route: Route, maintenance: bool) -> Result<Route, Route> {
    if maintenance && route != Route::Home {
        Err(Route::Home)
    } else {
        Ok(route)
    }
}

/// Path to log usage for, if the page at `path` is actually shown. Nothing is
/// tracked until the maintenance status is known, nor for pages that redirect.
pub fn tracked_path(path: &str, maintenance: Option<bool>) -> Option<String> {
    let maintenance = maintenance?;
    let route = Route::recognize(path).unwrap_or(Route::NotFound);
    gate(route, maintenance).ok().map(|_| path.to_string())
}

fn switch(routes: Route, maintenance: bool) -> Html {
    let routes = match gate(routes, maintenance) {
        Ok(route) => route,
        Err(target) => {
            info!("Maintenance mode, redirecting to {}", target.to_path());
            return html! { <Redirect<Route> to={target} /> };
        }
    };

    match routes {
        Route::Home => {
            if maintenance {
                info!("Rendering Maintenance page");
                html! { <Maintenance /> }
            } else {
                info!("Rendering Home page");
                html! { <Home /> }
            }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage slug={slug} /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::ServiceDetail { id } => {
            info!("Rendering Service detail {}", id);
            html! { <ServiceDetail id={id} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::<dyn FnMut()>::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_top > 80.0);
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Services, "Services"),
        (Route::Blog, "Insights"),
        (Route::About, "About"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Shieldline"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for links.into_iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route} classes="nav-link">{ label }</Link<Route>>
                            </div>
                        })
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-login-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"© Shieldline Facility Services. Security · Cleaning · Portering"}</p>
            <p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                {" · "}
                { config::CONTACT_PHONE }
            </p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct RoutedContentProps {
    /// `None` until the backend has answered.
    maintenance: Option<bool>,
}

/// Route content with enter/exit animation and usage tracking.
#[function_component(RoutedContent)]
fn routed_content(props: &RoutedContentProps) -> Html {
    let location = use_location();
    let path = location
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    use_page_tracking(tracked_path(&path, props.maintenance));

    let Some(maintenance) = props.maintenance else {
        return html! {};
    };

    let render = Callback::from(move |path: String| {
        switch(Route::recognize(&path).unwrap_or(Route::NotFound), maintenance)
    });

    html! {
        <PageTransition path={path} render={render} variant={TransitionVariant::SlideUp} />
    }
}


#[function_component]
fn App() -> Html {
    let maintenance = use_state(|| None::<bool>);

    {
        let maintenance = maintenance.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                let url = format!("{}/api/maintenance", config::get_backend_url());
                let status = match Request::get(&url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<MaintenanceStatus>().await {
                            Ok(status) => status.maintenance,
                            Err(e) => {
                                gloo_console::error!("Bad maintenance status body:", e.to_string());
                                false
                            }
                        }
                    }
                    Ok(response) => {
                        gloo_console::error!("Maintenance status request failed:", response.status());
                        false
                    }
                    Err(e) => {
                        gloo_console::error!("Maintenance status request failed:", e.to_string());
                        false
                    }
                };
                info!("Maintenance mode: {}", status);
                maintenance.set(Some(status));
            });
            || ()
        }, ());
    }

    html! {
        <ErrorBoundary>
            <BrowserRouter>
                <Nav />
                <main>
                    <RoutedContent maintenance={*maintenance} />
                </main>
                <Footer />
            </BrowserRouter>
        </ErrorBoundary>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/services/2"), Some(Route::ServiceDetail { id: 2 }));
        assert_eq!(
            Route::recognize("/blog/what-a-porter-does"),
            Some(Route::BlogPost { slug: "what-a-porter-does".to_string() })
        );
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn maintenance_gate_redirects_everything_but_root() {
        assert_eq!(gate(Route::Home, true), Ok(Route::Home));
        assert_eq!(gate(Route::About, true), Err(Route::Home));
        assert_eq!(gate(Route::ServiceDetail { id: 3 }, true), Err(Route::Home));
        assert_eq!(gate(Route::Contact, false), Ok(Route::Contact));
    }

    #[test]
    fn redirected_pages_are_not_tracked() {
        assert_eq!(tracked_path("/about", Some(true)), None);
        assert_eq!(tracked_path("/", Some(true)), Some("/".to_string()));
        assert_eq!(tracked_path("/about", Some(false)), Some("/about".to_string()));
        assert_eq!(tracked_path("/about", None), None);
    }

    #[test]
    fn backend_status_drives_the_gate() {
        let status: MaintenanceStatus = serde_json::from_str(r#"{"maintenance":true}"#).unwrap();
        for path in ["/about", "/blog", "/blog/what-a-porter-does", "/services/1", "/contact", "/nope"] {
            let route = Route::recognize(path).unwrap_or(Route::NotFound);
            assert_eq!(gate(route, status.maintenance), Err(Route::Home), "{}", path);
        }
        assert_eq!(gate(Route::Home, status.maintenance), Ok(Route::Home));

        let status: MaintenanceStatus = serde_json::from_str(r#"{"maintenance":false}"#).unwrap();
        assert_eq!(gate(Route::About, status.maintenance), Ok(Route::About));
    }
}
