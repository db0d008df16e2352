//! Home page hero banner with the reserve-a-table call to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Hero banner — the button navigates to the reservations page.
#[component]
pub fn Hero() -> impl IntoView {
    let navigate = use_navigate();
    let on_reserve = move |_| navigate("/reservations", NavigateOptions::default());

    view! {
        <section class="hero">
            <div class="hero__container">
                <div class="hero__content">
                    <h1 class="hero__title">"Little Lemon"</h1>
                    <h2 class="hero__subtitle">"Chicago"</h2>
                    <p class="hero__description">
                        "We are a family owned Mediterranean restaurant, focused on \
                         traditional recipes served with a modern twist."
                    </p>
                    <button
                        class="hero__button"
                        on:click=on_reserve
                        aria-label="Reserve a table at Little Lemon"
                    >
                        "Reserve a table"
                    </button>
                </div>
            </div>
        </section>
    }
}
