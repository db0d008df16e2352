//! Menu page: appetizer and dessert sections of menu cards.

use leptos::prelude::*;

use crate::components::card::Card;

struct MenuItem {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    image: &'static str,
}

const APPETIZERS: [MenuItem; 3] = [
    MenuItem {
        name: "Greek Salad",
        price: "12.99",
        description: "Crispy lettuce, peppers, olives and Chicago style feta \
                      cheese, garnished with crunchy garlic croutons.",
        image: "/images/greek-salad.jpg",
    },
    MenuItem {
        name: "Bruschetta",
        price: "5.99",
        description: "Grilled bread smeared with garlic and seasoned with salt \
                      and olive oil.",
        image: "/images/bruschetta.jpg",
    },
    MenuItem {
        name: "Hummus & Pita",
        price: "8.99",
        description: "Creamy chickpea hummus served with warm pita bread and \
                      olive oil.",
        image: "/images/hummus.jpg",
    },
];

const DESSERTS: [MenuItem; 3] = [
    MenuItem {
        name: "Lemon Dessert",
        price: "5.00",
        description: "Grandma's recipe with authentic Mediterranean ingredients.",
        image: "/images/lemon-dessert.jpg",
    },
    MenuItem {
        name: "Baklava",
        price: "6.99",
        description: "Layers of phyllo pastry with honey and nuts.",
        image: "/images/menu/baklava.webp",
    },
    MenuItem {
        name: "Greek Tea",
        price: "4.99",
        description: "Traditional Greek mountain tea, served hot.",
        image: "/images/menu/tea.jpeg",
    },
];

fn menu_section(title: &'static str, items: &'static [MenuItem]) -> impl IntoView {
    view! {
        <section class="menu-page__section">
            <div class="menu-page__container">
                <h2>{title}</h2>
                <div class="menu-page__grid">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <Card
                                    title=item.name.to_owned()
                                    price=item.price.to_owned()
                                    description=item.description.to_owned()
                                    image=item.image.to_owned()
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// "Our Menu" page.
#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <main class="menu-page">
            <div class="menu-page__header">
                <h1>"Our Menu"</h1>
                <p>"Discover our selection of authentic Mediterranean dishes"</p>
            </div>
            {menu_section("Appetizers", &APPETIZERS)}
            {menu_section("Desserts", &DESSERTS)}
        </main>
    }
}
