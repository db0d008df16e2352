//! Site header with logo and main navigation.

use leptos::prelude::*;

/// Persistent header shown above every page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__container">
                <a href="/">
                    <img
                        src="/images/logo.jpg"
                        alt="Little Lemon Restaurant Logo"
                        class="header__logo"
                    />
                </a>
                <nav class="header__nav" aria-label="Main navigation">
                    <ul class="header__nav-list">
                        <li><a href="/">"Home"</a></li>
                        <li><a href="/about">"About"</a></li>
                        <li><a href="/menu">"Menu"</a></li>
                        <li><a href="/reservations">"Reservations"</a></li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
