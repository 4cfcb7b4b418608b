use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Trailing-edge debouncer owned by the current component.
///
/// Each `call` replaces the pending timer. The pending timer is dropped when
/// the owning component is torn down, so a late keystroke never fires into a
/// disposed page.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        let pending = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            pending.try_update_value(|slot| {
                if let Some(timeout) = slot.take() {
                    timeout.cancel();
                }
            });
        });
        Self { pending, delay_ms }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        self.pending.update_value(|slot| {
            if let Some(previous) = slot.replace(timeout) {
                previous.cancel();
            }
        });
    }

    pub fn cancel(&self) {
        self.pending.update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
    }
}
