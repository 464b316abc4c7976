use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::RevealVariant;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{find_post, BLOG_POSTS};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Insights"}</h1>
                <p>{"Notes from our guards, cleaners and porters on keeping buildings safe and welcoming."}</p>
            </section>
            <section class="blog-list-section">
                {
                    for BLOG_POSTS.iter().enumerate().map(|(i, post)| html! {
                        <ScrollReveal delay={i as f64 * 0.1} variant={RevealVariant::FadeLeft}>
                            <div class="blog-post-preview">
                                <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                    <span class="blog-category">{ post.category }</span>
                                    <h2>{ post.title }</h2>
                                    <p>{ post.summary }</p>
                                    <span class="blog-date">{ post.date }</span>
                                </Link<Route>>
                            </div>
                        </ScrollReveal>
                    })
                }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let Some(post) = find_post(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <article class="blog-post-page">
            <header class="blog-post-header">
                <span class="blog-category">{ post.category }</span>
                <h1>{ post.title }</h1>
                <span class="blog-date">{ post.date }</span>
            </header>
            {
                for post.body.iter().map(|paragraph| html! {
                    <ScrollReveal variant={RevealVariant::Fade} threshold={0.2}>
                        <p>{ *paragraph }</p>
                    </ScrollReveal>
                })
            }
            <Link<Route> to={Route::Blog} classes="forward-link">{"← All posts"}</Link<Route>>
        </article>
    }
}
