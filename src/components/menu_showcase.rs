//! Weekly specials carousel for the home page.
//!
//! Index/window arithmetic lives in [`crate::state::carousel`]; this module
//! only wires it to buttons, dots, and the viewport width.

use leptos::prelude::*;

use crate::state::carousel::CarouselState;
use crate::util::browser::viewport_width;

struct Special {
    name: &'static str,
    price: &'static str,
    image: &'static str,
    alt: &'static str,
}

const SPECIALS: [Special; 5] = [
    Special {
        name: "BBQ Grilled Fish",
        price: "$18.99",
        image: "/images/bbq-fish-grilled.jpg",
        alt: "BBQ grilled fish with vegetables",
    },
    Special {
        name: "Marina Pasta",
        price: "$14.99",
        image: "/images/marina-pasta.jpg",
        alt: "Fresh marina pasta",
    },
    Special {
        name: "Greek Salad",
        price: "$12.99",
        image: "/images/salad-greek.jpg",
        alt: "Traditional Greek salad",
    },
    Special {
        name: "Sushi Platter",
        price: "$22.99",
        image: "/images/shushi.jpg",
        alt: "Fresh sushi platter",
    },
    Special {
        name: "Tomato Bruschetta",
        price: "$9.99",
        image: "/images/tomato-bruschetta.jpg",
        alt: "Tomato bruschetta appetizer",
    },
];

/// "This Week's Specials" carousel with prev/next buttons and dot
/// indicators. Items-per-view follows the viewport width breakpoints.
#[component]
pub fn MenuShowcase() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::default());

    // Pick up the real viewport width once hydrated; effects never run
    // during SSR.
    Effect::new(move || {
        if let Some(width) = viewport_width() {
            carousel.update(|c| c.set_viewport_width(width, SPECIALS.len()));
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = viewport_width() {
                carousel.update(|c| c.set_viewport_width(width, SPECIALS.len()));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let max_index = move || carousel.with(|c| c.max_index(SPECIALS.len()));
    let at_start = move || carousel.with(|c| c.index == 0);
    let at_end = move || carousel.with(|c| c.index == c.max_index(SPECIALS.len()));

    // Each item occupies (100 / items_per_view)% of the wrapper, so the
    // track shifts by that much per index step.
    let track_style = move || {
        let c = carousel.get();
        #[allow(clippy::cast_precision_loss)]
        let offset = c.index as f64 * (100.0 / c.items_per_view as f64);
        format!("transform: translateX(-{offset}%)")
    };

    view! {
        <section class="menu-showcase">
            <div class="menu-showcase__container">
                <h2 class="menu-showcase__title">"This Week's Specials!"</h2>

                <div class="menu-showcase__carousel">
                    <button
                        class="menu-showcase__button menu-showcase__button--prev"
                        on:click=move |_| carousel.update(CarouselState::prev)
                        disabled=at_start
                        aria-label="Previous menu items"
                    >
                        "‹"
                    </button>

                    <div class="menu-showcase__viewport">
                        <div class="menu-showcase__track" style=track_style>
                            {SPECIALS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <article class="menu-showcase__item">
                                            <div class="menu-showcase__item-image">
                                                <img src=item.image alt=item.alt/>
                                            </div>
                                            <div class="menu-showcase__item-info">
                                                <h3>{item.name}</h3>
                                                <p class="menu-showcase__item-price">{item.price}</p>
                                            </div>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <button
                        class="menu-showcase__button menu-showcase__button--next"
                        on:click=move |_| carousel.update(|c| c.next(SPECIALS.len()))
                        disabled=at_end
                        aria-label="Next menu items"
                    >
                        "›"
                    </button>
                </div>

                <div class="menu-showcase__dots">
                    {move || {
                        (0..=max_index())
                            .map(|dot| {
                                view! {
                                    <button
                                        class="menu-showcase__dot"
                                        class=(
                                            "menu-showcase__dot--active",
                                            move || carousel.with(|c| c.index == dot),
                                        )
                                        on:click=move |_| {
                                            carousel.update(|c| c.go_to(dot, SPECIALS.len()))
                                        }
                                        aria-label=format!("Go to slide {}", dot + 1)
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </section>
    }
}
