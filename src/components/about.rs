//! Restaurant story section, shared by the home and about pages.

use leptos::prelude::*;

/// Two-paragraph restaurant history with a photo.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <div class="about__container">
                <div class="about__content">
                    <h2>"Little Lemon"</h2>
                    <h3>"Chicago"</h3>
                    <p>
                        "Founded in 1995 by brothers Adrian and Mario, Little Lemon was \
                         born from a simple dream: to share the authentic flavors of \
                         their Italian Mediterranean heritage with Chicago. What started \
                         as a small family kitchen has grown into a beloved neighborhood \
                         destination."
                    </p>
                    <p>
                        "Nearly three decades later, the brothers still personally \
                         oversee every aspect of the restaurant. From hand-selecting \
                         seasonal ingredients to crafting new dishes, their passion for \
                         Mediterranean cuisine shines through in every meal we serve."
                    </p>
                </div>
                <div class="about__images">
                    <img
                        src="/images/restaurant.jpg"
                        alt="Mario and Adrian at the restaurant"
                        class="about__image"
                    />
                </div>
            </div>
        </section>
    }
}
