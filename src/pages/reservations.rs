//! Reservations page: owns the offered time slots and hosts the wizard.

use leptos::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::state::booking::offered_times;

/// Reservation page.
///
/// The page owns the offered slot list and recomputes it whenever the
/// wizard reports a date change; the wizard itself only reads the slots.
#[component]
pub fn ReservationsPage() -> impl IntoView {
    let available_times = RwSignal::new(offered_times(""));
    let on_date_change = Callback::new(move |date: String| {
        available_times.set(offered_times(&date));
    });

    view! {
        <main class="reservations-page">
            <div class="reservations-page__container">
                <h1>"Reservation"</h1>
                <BookingForm available_times=available_times on_date_change=on_date_change/>
            </div>
        </main>
    }
}
