use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::config;
use crate::models::CopyField;
use crate::state::{PageAction, PageState};

#[wasm_bindgen]
extern "C" {
    // Throws when the page has no clipboard access at all (insecure context).
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

/// Puts `text` on the system clipboard. Rejects if the host denies access.
pub async fn copy_text(text: &str) -> Result<(), JsValue> {
    let promise = write_text(text)?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Bookkeeping behind the "✓ Copied!" badge: numbers successful copies and
/// holds the one pending expiry timer. `H` is the timer handle; dropping it
/// must cancel the timer, as gloo's `Timeout` does.
pub struct CopyIndicator<H = Timeout> {
    generation: u64,
    pending: Option<H>,
    active: bool,
}

impl<H> Default for CopyIndicator<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
            active: true,
        }
    }
}

impl<H> CopyIndicator<H> {
    /// Starts a new badge lifetime and returns its generation, or `None` once
    /// the page is gone.
    pub fn begin(&mut self) -> Option<u64> {
        if !self.active {
            return None;
        }
        self.generation += 1;
        Some(self.generation)
    }

    /// Keeps `timer` as the pending expiry, cancelling the one it replaces.
    pub fn arm(&mut self, timer: H) {
        if self.active {
            self.pending = Some(timer);
        }
    }

    /// Cancels the pending expiry for good. Called on unmount.
    pub fn cancel(&mut self) {
        self.active = false;
        self.pending = None;
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Returns the copy action for the page.
///
/// Only successful writes raise the badge; failures are logged and otherwise
/// invisible. Every success replaces the pending badge timer, and unmounting
/// cancels it together with any clipboard write still in flight.
#[hook]
pub fn use_copy_action(dispatcher: UseReducerDispatcher<PageState>) -> Callback<CopyField> {
    let indicator = use_mut_ref(CopyIndicator::<Timeout>::default);

    {
        let indicator = indicator.clone();
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    indicator.borrow_mut().cancel();
                    dispatcher.dispatch(PageAction::Teardown);
                }
            },
            (),
        );
    }

    Callback::from(move |field: CopyField| {
        let dispatcher = dispatcher.clone();
        let indicator = indicator.clone();

        spawn_local(async move {
            match copy_text(field.value).await {
                Ok(()) => {
                    let Some(generation) = indicator.borrow_mut().begin() else {
                        return;
                    };
                    info!("Copied {} to clipboard", field.key);
                    dispatcher.dispatch(PageAction::Copied {
                        key: field.key,
                        generation,
                    });

                    let expire = dispatcher.clone();
                    let timeout = Timeout::new(config::COPY_FEEDBACK_MS, move || {
                        expire.dispatch(PageAction::ExpireCopy(generation));
                    });
                    indicator.borrow_mut().arm(timeout);
                }
                Err(err) => {
                    gloo_console::error!("Failed to copy", field.key.as_str(), err);
                }
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use yew::Reducible;

    use super::*;
    use crate::models::CopyKey;

    /// Stands in for a gloo `Timeout`: counts how many were cancelled.
    struct FakeTimer(Rc<Cell<u32>>);

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn copy(
        indicator: &mut CopyIndicator<FakeTimer>,
        state: Rc<PageState>,
        key: CopyKey,
        cancelled: &Rc<Cell<u32>>,
    ) -> (Rc<PageState>, u64) {
        let generation = indicator.begin().expect("page is mounted");
        indicator.arm(FakeTimer(cancelled.clone()));
        (state.reduce(PageAction::Copied { key, generation }), generation)
    }

    #[test]
    fn badge_lives_for_two_seconds() {
        assert_eq!(config::COPY_FEEDBACK_MS, 2_000);
    }

    #[test]
    fn single_copy_expires_after_its_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut indicator = CopyIndicator::default();
        let (state, generation) = copy(
            &mut indicator,
            Rc::new(PageState::default()),
            CopyKey::MisrAccount,
            &cancelled,
        );
        assert_eq!(state.copied.map(|k| k.as_str()), Some("misr-account"));

        let state = state.reduce(PageAction::ExpireCopy(generation));
        assert_eq!(state.copied, None);
    }

    #[test]
    fn second_copy_cancels_first_timer_and_outlives_it() {
        let cancelled = Rc::new(Cell::new(0));
        let mut indicator = CopyIndicator::default();
        let state = Rc::new(PageState::default());

        let (state, first) = copy(&mut indicator, state, CopyKey::MisrAccount, &cancelled);
        let (state, second) = copy(&mut indicator, state, CopyKey::SaibAccount, &cancelled);
        assert_ne!(first, second);
        assert_eq!(cancelled.get(), 1);
        assert!(indicator.has_pending());
        assert_eq!(state.copied, Some(CopyKey::SaibAccount));

        // A late firing of the first timer leaves the newer key in place.
        let state = state.reduce(PageAction::ExpireCopy(first));
        assert_eq!(state.copied, Some(CopyKey::SaibAccount));

        let state = state.reduce(PageAction::ExpireCopy(second));
        assert_eq!(state.copied, None);
    }

    #[test]
    fn recopying_same_key_restarts_lifetime() {
        let cancelled = Rc::new(Cell::new(0));
        let mut indicator = CopyIndicator::default();
        let state = Rc::new(PageState::default());

        let (state, first) = copy(&mut indicator, state, CopyKey::MisrIban, &cancelled);
        let (state, _) = copy(&mut indicator, state, CopyKey::MisrIban, &cancelled);

        let state = state.reduce(PageAction::ExpireCopy(first));
        assert!(state.is_copied(CopyKey::MisrIban));
    }

    #[test]
    fn cancel_drops_pending_timer_and_refuses_new_copies() {
        let cancelled = Rc::new(Cell::new(0));
        let mut indicator = CopyIndicator::default();
        let (_, _) = copy(
            &mut indicator,
            Rc::new(PageState::default()),
            CopyKey::AccountNameEnglish,
            &cancelled,
        );

        indicator.cancel();
        assert_eq!(cancelled.get(), 1);
        assert!(!indicator.has_pending());
        assert_eq!(indicator.begin(), None);

        // A timer handed over after unmount is dropped straight away.
        indicator.arm(FakeTimer(cancelled.clone()));
        assert_eq!(cancelled.get(), 2);
        assert!(!indicator.has_pending());
    }
}
