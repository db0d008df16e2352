//! About page: the restaurant story plus a values grid.

use leptos::prelude::*;

use crate::components::about::AboutSection;

struct Value {
    heading: &'static str,
    text: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        heading: "🍋 Fresh Ingredients",
        text: "We source the freshest local and imported ingredients to ensure \
               authentic Mediterranean flavors.",
    },
    Value {
        heading: "👨‍🍳 Traditional Recipes",
        text: "Our recipes are passed down through generations, preserving the \
               authentic taste of the Mediterranean.",
    },
    Value {
        heading: "❤️ Family Atmosphere",
        text: "We treat every guest like family, providing warm hospitality and \
               exceptional service.",
    },
    Value {
        heading: "🌿 Sustainability",
        text: "We're committed to sustainable practices and supporting local \
               farmers and suppliers.",
    },
];

/// "Our Story" page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="about-page">
            <div class="about-page__header">
                <h1>"Our Story"</h1>
                <p>"Bringing authentic Mediterranean flavors to Chicago since 1995"</p>
            </div>
            <AboutSection/>
            <section class="values">
                <div class="values__container">
                    <h2>"Our Values"</h2>
                    <div class="values__grid">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <div class="values__card">
                                        <h3>{value.heading}</h3>
                                        <p>{value.text}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </main>
    }
}
