//! Root application component with routing and the persistent header.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, home::HomePage, menu::MenuPage, reservations::ReservationsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The header stays mounted across navigation; only the route outlet swaps.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/little-lemon-web.css"/>
        <Title text="Little Lemon"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("menu") view=MenuPage/>
                <Route path=StaticSegment("reservations") view=ReservationsPage/>
            </Routes>
        </Router>
    }
}
