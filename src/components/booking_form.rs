//! Two-step reservation wizard.
//!
//! All validation and step-transition logic lives in
//! [`crate::state::booking`]; this component renders the current step,
//! forwards input events, and owns the post-confirmation effects (success
//! toast, delayed redirect home).

use leptos::prelude::*;

use crate::components::toast::Toast;
use crate::state::booking::{BookingState, BookingStep, Field, display_time};
use crate::util::browser::today_iso;

/// Delay between a confirmed reservation and the redirect to the home page.
pub const REDIRECT_DELAY_MS: u64 = 2000;

/// The reservation wizard.
///
/// The caller owns the offered time slots and is notified via
/// `on_date_change` whenever the date field changes, so it can recompute
/// the slot list. This component only reads the slots.
#[component]
pub fn BookingForm(
    available_times: RwSignal<Vec<String>>,
    on_date_change: Callback<String>,
) -> impl IntoView {
    let booking = RwSignal::new(BookingState::default());
    let show_toast = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // Disposed with the owner; the redirect timer checks it before firing
    // so an unmounted wizard never navigates.
    let alive = StoredValue::new(());

    let has_error = move |field: Field| booking.with(|b| b.errors.contains_key(&field));
    let aria_invalid = move |field: Field| if has_error(field) { "true" } else { "false" };
    let describedby = move |field: Field| has_error(field).then(|| format!("{}-error", field.id()));

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The cutoff is the date at validation time, not at mount.
        let today = today_iso().unwrap_or_default();
        booking.update(|b| {
            b.advance(&today);
        });
    };

    let on_back = move |_| booking.update(BookingState::retreat);

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let confirmed = booking.try_update(BookingState::confirm).unwrap_or(false);
        if !confirmed {
            return;
        }
        show_toast.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS))
                    .await;
                if alive.try_get_value().is_some() {
                    navigate("/", leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = alive;
    };

    let on_details_step = move || booking.with(|b| b.step == BookingStep::Details);
    let past_details_step = move || booking.with(|b| b.step != BookingStep::Details);

    view! {
        <Show when=move || show_toast.get()>
            <Toast
                message="Reservation confirmed successfully! Redirecting to home page..."
                    .to_owned()
                on_close=Callback::new(move |_| show_toast.set(false))
            />
        </Show>

        <div class="booking-form__container">
            <div class="booking-form__progress">
                <div class="booking-form__step booking-form__step--active">
                    <div class="booking-form__step-number">"1"</div>
                    <div class="booking-form__step-label">"Reservation Details"</div>
                </div>
                <div class="booking-form__progress-line"></div>
                <div
                    class="booking-form__step"
                    class=("booking-form__step--active", past_details_step)
                >
                    <div class="booking-form__step-number">"2"</div>
                    <div class="booking-form__step-label">"Your Information"</div>
                </div>
            </div>

            <Show when=on_details_step>
                <form class="booking-form" on:submit=on_next>
                    <div class="booking-form__group">
                        <label for="date">"Date *"</label>
                        <input
                            type="date"
                            id="date"
                            name="date"
                            prop:value=move || booking.with(|b| b.draft.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                booking.update(|b| b.set_field(Field::Date, value.clone()));
                                on_date_change.run(value);
                            }
                            min=move || today_iso().unwrap_or_default()
                            class=("booking-form__input--error", move || has_error(Field::Date))
                            aria-required="true"
                            aria-invalid=move || aria_invalid(Field::Date)
                            aria-describedby=move || describedby(Field::Date)
                        />
                        <FieldError booking=booking field=Field::Date/>
                    </div>

                    <div class="booking-form__group">
                        <label for="time">"Time *"</label>
                        <select
                            id="time"
                            name="time"
                            prop:value=move || booking.with(|b| b.draft.time.clone())
                            on:change=move |ev| {
                                booking.update(|b| b.set_field(Field::Time, event_target_value(&ev)));
                            }
                            class=("booking-form__input--error", move || has_error(Field::Time))
                            aria-required="true"
                            aria-invalid=move || aria_invalid(Field::Time)
                            aria-describedby=move || describedby(Field::Time)
                        >
                            <option value="">"Select a time"</option>
                            {move || {
                                let chosen = booking.with(|b| b.draft.time.clone());
                                available_times
                                    .get()
                                    .into_iter()
                                    .map(|slot| {
                                        let label = display_time(&slot);
                                        let is_chosen = slot == chosen;
                                        view! {
                                            <option value=slot selected=is_chosen>{label}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <FieldError booking=booking field=Field::Time/>
                    </div>

                    <div class="booking-form__group">
                        <label for="diners">"Number of Diners *"</label>
                        <input
                            type="number"
                            id="diners"
                            name="diners"
                            prop:value=move || booking.with(|b| b.draft.diners.clone())
                            on:input=move |ev| {
                                booking.update(|b| b.set_field(Field::Diners, event_target_value(&ev)));
                            }
                            min="1"
                            max="20"
                            placeholder="Enter number of guests"
                            class=("booking-form__input--error", move || has_error(Field::Diners))
                            aria-required="true"
                            aria-invalid=move || aria_invalid(Field::Diners)
                            aria-describedby=move || describedby(Field::Diners)
                        />
                        <FieldError booking=booking field=Field::Diners/>
                    </div>

                    <button type="submit" class="booking-form__button booking-form__button--next">
                        "Next"
                    </button>
                </form>
            </Show>

            <Show when=past_details_step>
                <form class="booking-form" on:submit=on_confirm>
                    <div class="booking-form__group">
                        <label for="first-name">"First Name *"</label>
                        <input
                            type="text"
                            id="first-name"
                            name="first-name"
                            prop:value=move || booking.with(|b| b.draft.first_name.clone())
                            on:input=move |ev| {
                                booking
                                    .update(|b| b.set_field(Field::FirstName, event_target_value(&ev)));
                            }
                            placeholder="Enter your first name"
                            class=("booking-form__input--error", move || has_error(Field::FirstName))
                            aria-required="true"
                            aria-invalid=move || aria_invalid(Field::FirstName)
                            aria-describedby=move || describedby(Field::FirstName)
                        />
                        <FieldError booking=booking field=Field::FirstName/>
                    </div>

                    <div class="booking-form__group">
                        <label for="last-name">"Last Name *"</label>
                        <input
                            type="text"
                            id="last-name"
                            name="last-name"
                            prop:value=move || booking.with(|b| b.draft.last_name.clone())
                            on:input=move |ev| {
                                booking
                                    .update(|b| b.set_field(Field::LastName, event_target_value(&ev)));
                            }
                            placeholder="Enter your last name"
                            class=("booking-form__input--error", move || has_error(Field::LastName))
                            aria-required="true"
                            aria-invalid=move || aria_invalid(Field::LastName)
                            aria-describedby=move || describedby(Field::LastName)
                        />
                        <FieldError booking=booking field=Field::LastName/>
                    </div>

                    <div class="booking-form__group">
                        <label for="phone">"Phone Number *"</label>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            prop:value=move || booking.with(|b| b.draft.phone.clone())
                            on:input=move |ev| {
                                booking.update(|b| b.set_field(Field::Phone, event_target_value(&ev)));
                            }
                            placeholder="Enter your phone number"
                            class=("booking-form__input--error", move || has_error(Field::Phone))
                            aria-required="true"
                            aria-invalid=move || aria_invalid(Field::Phone)
                            aria-describedby=move || describedby(Field::Phone)
                        />
                        <FieldError booking=booking field=Field::Phone/>
                    </div>

                    <div class="booking-form__buttons">
                        <button
                            type="button"
                            class="booking-form__button booking-form__button--back"
                            on:click=on_back
                        >
                            "Back"
                        </button>
                        <button
                            type="submit"
                            class="booking-form__button booking-form__button--confirm"
                        >
                            "Confirm Reservation"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// Inline error message for one field, rendered only while that field has a
/// validation error. The id matches the input's `aria-describedby`.
#[component]
fn FieldError(booking: RwSignal<BookingState>, field: Field) -> impl IntoView {
    move || {
        booking.with(|b| b.error(field)).map(|message| {
            view! {
                <span
                    id=format!("{}-error", field.id())
                    class="booking-form__error"
                    role="alert"
                >
                    {message}
                </span>
            }
        })
    }
}
