//! Home page: hero, weekly specials, and the restaurant story.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::hero::Hero;
use crate::components::menu_showcase::MenuShowcase;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <MenuShowcase/>
            <AboutSection/>
        </main>
    }
}
