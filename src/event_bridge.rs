use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, MouseEvent, Window};
use yew::prelude::*;

use crate::state::{PageAction, PageState, ScrollMetrics};

/// A passive listener on `window`, removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn passive<F>(window: &Window, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .expect("failed to attach window listener");

        Self {
            window: window.clone(),
            event,
            callback,
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Reads scroll offset, viewport height and document height. Missing host
/// objects read as an unscrollable page.
pub fn read_scroll_metrics(window: &Window) -> ScrollMetrics {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);

    ScrollMetrics {
        scroll_top,
        viewport_height,
        document_height,
    }
}

/// Subscribes the page to window scroll and mouse-move events for as long as
/// it is mounted.
#[hook]
pub fn use_page_events(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with_deps(
        move |_| {
            let listeners = web_sys::window().map(|window| {
                let scroll = {
                    let dispatcher = dispatcher.clone();
                    let reader = window.clone();
                    WindowListener::passive(&window, "scroll", move |_| {
                        dispatcher.dispatch(PageAction::Scrolled(read_scroll_metrics(&reader)));
                    })
                };
                let mouse_move = {
                    let dispatcher = dispatcher.clone();
                    WindowListener::passive(&window, "mousemove", move |event: Event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            dispatcher.dispatch(PageAction::PointerMoved {
                                x: event.client_x() as f64,
                                y: event.client_y() as f64,
                            });
                        }
                    })
                };

                // Initial reading, in case the page was restored mid-scroll
                dispatcher.dispatch(PageAction::Scrolled(read_scroll_metrics(&window)));

                (scroll, mouse_move)
            });

            move || {
                log::debug!("Detaching page listeners");
                drop(listeners);
            }
        },
        (),
    );
}
