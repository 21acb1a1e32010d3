//! Delayed browser callbacks.

/// Run `f` once after `millis`. Dropped silently outside the browser.
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(millis, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (millis, f);
    }
}
