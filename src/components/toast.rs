//! Transient notification banner.

use leptos::prelude::*;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u64 = 3000;

/// Success/info toast that auto-dismisses after [`TOAST_DURATION_MS`] and
/// can be closed early with the close button.
///
/// The dismiss timer is guarded by a reactive-owner liveness check, so a
/// timer that fires after the toast unmounts is a no-op instead of a
/// callback into dead state.
#[component]
pub fn Toast(
    message: String,
    #[prop(default = "success")] kind: &'static str,
    on_close: Callback<()>,
) -> impl IntoView {
    // Disposed with the owner; the timer checks it before firing.
    let alive = StoredValue::new(());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        if alive.try_get_value().is_some() {
            on_close.run(());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = alive;

    let icon = if kind == "success" { "✓" } else { "ℹ" };

    view! {
        <div class=format!("toast toast--{kind}") role="alert" aria-live="polite">
            <div class="toast__content">
                <span class="toast__icon">{icon}</span>
                <p class="toast__message">{message}</p>
            </div>
            <button
                class="toast__close"
                on:click=move |_| on_close.run(())
                aria-label="Close notification"
            >
                "×"
            </button>
        </div>
    }
}
