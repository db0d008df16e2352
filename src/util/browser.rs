//! Browser clock and viewport access.
//!
//! Client-side (hydrate): real `js-sys`/`web-sys` calls. Server-side (SSR):
//! `None`, so callers degrade instead of panicking outside a browser.

/// Today's date as an ISO `YYYY-MM-DD` string from the browser clock.
pub fn today_iso() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.split_once('T').map(|(date, _)| date.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current window inner width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
