//! Reusable card for menu items.

use leptos::prelude::*;

/// A menu-item card with name, price, and optional image and description.
#[component]
pub fn Card(
    title: String,
    price: String,
    #[prop(optional, into)] image: Option<String>,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    let alt = title.clone();

    view! {
        <article class="card">
            {image
                .map(|src| {
                    view! {
                        <div class="card__image">
                            <img src=src alt=alt.clone()/>
                        </div>
                    }
                })}
            <div class="card__content">
                <div class="card__header">
                    <h3>{title}</h3>
                    <span class="card__price">"$"{price}</span>
                </div>
                {description.map(|text| view! { <p class="card__description">{text}</p> })}
            </div>
        </article>
    }
}
