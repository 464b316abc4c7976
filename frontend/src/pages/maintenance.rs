use yew::prelude::*;

use crate::components::shield::Shield;
use crate::config;

#[function_component(Maintenance)]
pub fn maintenance() -> Html {
    html! {
        <div class="maintenance-page">
            <Shield size={120} spin=true />
            <h1>{"We'll be back soon"}</h1>
            <p>{"Our website is undergoing scheduled maintenance. Our services continue as normal."}</p>
            <p>
                {"For urgent requests call "}
                <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{ config::CONTACT_PHONE }</a>
                {" or email "}
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
            </p>
        </div>
    }
}
