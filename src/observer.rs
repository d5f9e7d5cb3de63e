use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::UiError;

/// Intersection thresholds for the page's observers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl ObserverOptions {
    /// Scroll-triggered reveal: 10% visible, bottom edge pulled in by 50px.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: Some("0px 0px -50px 0px"),
    };

    /// Stats section: half visible.
    pub const STATS: Self = Self {
        threshold: 0.5,
        root_margin: None,
    };

    /// Browser defaults, used by the lazy image fallback.
    pub const DEFAULT: Self = Self {
        threshold: 0.0,
        root_margin: None,
    };

    fn to_init(self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        if let Some(margin) = self.root_margin {
            init.set_root_margin(margin);
        }
        init
    }
}

/// Owns an `IntersectionObserver` and its callback; disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_entry` runs for every entry of every callback batch.
    pub fn new<F>(options: ObserverOptions, mut on_entry: F) -> Result<Self, UiError>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options.to_init(),
        )?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_and_stats_thresholds() {
        assert_eq!(ObserverOptions::REVEAL.threshold, 0.1);
        assert_eq!(ObserverOptions::REVEAL.root_margin, Some("0px 0px -50px 0px"));
        assert_eq!(ObserverOptions::STATS.threshold, 0.5);
        assert!(ObserverOptions::DEFAULT.root_margin.is_none());
    }
}
