//! "Near the end of the list" signal for infinite scrolling.
//!
//! One hook, two sources: an `IntersectionObserver` on a sentinel element
//! placed after the last item when the browser has one, otherwise a window
//! scroll listener. Both go through [`EdgeTrigger`] so the callback fires
//! once per far-to-near transition.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Distance from the bottom of the document at which the list counts as "near the end".
pub const NEAR_END_THRESHOLD_PX: f64 = 200.0;

/// Fires only when the observed condition goes from false to true.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTrigger {
    near: bool,
}

impl EdgeTrigger {
    /// Records the latest reading; returns true on a rising edge.
    pub fn observe(&mut self, near: bool) -> bool {
        let fire = near && !self.near;
        self.near = near;
        fire
    }

    pub fn rearm(&mut self) {
        self.near = false;
    }
}

pub fn is_near_bottom(
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
    threshold: f64,
) -> bool {
    scroll_y + viewport_height >= document_height - threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearEndSource {
    Observer,
    ScrollListener,
}

impl NearEndSource {
    pub fn detect() -> Self {
        let supported = web_sys::window()
            .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false);
        if supported {
            Self::Observer
        } else {
            Self::ScrollListener
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Handle returned by [`use_near_end`].
#[derive(Clone, Copy)]
pub struct NearEnd {
    source: NearEndSource,
    sentinel: NodeRef<Div>,
    trigger: StoredValue<EdgeTrigger>,
    observer: StoredValue<Option<(IntersectionObserver, ObserverCallback)>, LocalStorage>,
    on_near_end: Callback<()>,
}

impl NearEnd {
    /// Forget the last reading and look again.
    ///
    /// Called after the list grew: if the sentinel is still in view (short
    /// pages, tall screens) this counts as a new crossing.
    pub fn rearm(&self) {
        self.trigger.update_value(EdgeTrigger::rearm);
        match self.source {
            NearEndSource::Observer => {
                let Some(el) = self.sentinel.get_untracked() else {
                    return;
                };
                // Re-observing makes the browser deliver a fresh initial entry.
                self.observer.with_value(|slot| {
                    if let Some((observer, _)) = slot {
                        observer.unobserve(&el);
                        observer.observe(&el);
                    }
                });
            }
            NearEndSource::ScrollListener => self.check_scroll_position(),
        }
    }

    fn report(&self, near: bool) {
        let fire = self
            .trigger
            .try_update_value(|t| t.observe(near))
            .unwrap_or(false);
        if fire {
            self.on_near_end.run(());
        }
    }

    fn check_scroll_position(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        self.report(is_near_bottom(
            scroll_y,
            viewport,
            document_height,
            NEAR_END_THRESHOLD_PX,
        ));
    }

    fn attach_observer(self, el: &web_sys::Element) {
        if self.observer.with_value(|slot| slot.is_some()) {
            return;
        }

        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _| {
            let near = entries.iter().any(|entry| {
                entry
                    .dyn_ref::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            self.report(near);
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&format!("0px 0px {}px 0px", NEAR_END_THRESHOLD_PX));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(el);
                self.observer.set_value(Some((observer, callback)));
            }
            Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
        }
    }
}

/// Calls `on_near_end` whenever the end of the list comes into reach.
///
/// `sentinel` must be rendered after the last item. Whatever is installed is
/// released when the calling component is disposed.
pub fn use_near_end(sentinel: NodeRef<Div>, on_near_end: Callback<()>) -> NearEnd {
    let near_end = NearEnd {
        source: NearEndSource::detect(),
        sentinel,
        trigger: StoredValue::new(EdgeTrigger::default()),
        observer: StoredValue::new_local(None),
        on_near_end,
    };
    log::debug!("near-end source: {:?}", near_end.source);

    match near_end.source {
        NearEndSource::Observer => {
            Effect::new(move |_| {
                if let Some(el) = sentinel.get() {
                    near_end.attach_observer(&el);
                }
            });
            on_cleanup(move || {
                near_end.observer.try_update_value(|slot| {
                    if let Some((observer, _callback)) = slot.take() {
                        observer.disconnect();
                    }
                });
            });
        }
        NearEndSource::ScrollListener => {
            let handle = window_event_listener(ev::scroll, move |_| {
                near_end.check_scroll_position();
            });
            on_cleanup(move || handle.remove());
        }
    }

    near_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_trigger_fires_on_rising_edge_only() {
        let mut trigger = EdgeTrigger::default();
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
    }

    #[test]
    fn test_edge_trigger_rearm() {
        let mut trigger = EdgeTrigger::default();
        assert!(trigger.observe(true));
        trigger.rearm();
        assert!(trigger.observe(true));
    }

    #[test]
    fn test_is_near_bottom() {
        // 2000px document, 800px viewport: bottom reached at scroll 1200
        assert!(!is_near_bottom(0.0, 800.0, 2000.0, 200.0));
        assert!(!is_near_bottom(999.0, 800.0, 2000.0, 200.0));
        assert!(is_near_bottom(1000.0, 800.0, 2000.0, 200.0));
        assert!(is_near_bottom(1200.0, 800.0, 2000.0, 200.0));
    }

    #[test]
    fn test_short_document_is_near_bottom() {
        assert!(is_near_bottom(0.0, 800.0, 600.0, NEAR_END_THRESHOLD_PX));
    }
}
