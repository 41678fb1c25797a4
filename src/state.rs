use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::models::{CopyKey, Panel};

/// The three host readings taken on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable range already scrolled, in [0, 100].
    /// A page that fits the viewport reports 0.
    pub fn progress(&self) -> f64 {
        let total_scroll = self.document_height - self.viewport_height;
        if !total_scroll.is_finite() || total_scroll <= 0.0 {
            return 0.0;
        }
        let progress = self.scroll_top / total_scroll * 100.0;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 100.0)
        }
    }
}

pub enum PageAction {
    TogglePanel(Panel),
    /// The clipboard accepted the text behind this key. Generations grow
    /// with every successful copy.
    Copied { key: CopyKey, generation: u64 },
    /// The badge timer scheduled for this copy generation fired.
    ExpireCopy(u64),
    Scrolled(ScrollMetrics),
    PointerMoved { x: f64, y: f64 },
    /// Reducer-level guard: ignore everything afterwards. Unmount itself is
    /// handled by cancelling the copy timer and dropping the listeners.
    Teardown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub expanded: Option<Panel>,
    pub copied: Option<CopyKey>,
    pub copy_generation: u64,
    pub scroll_progress: f64,
    pub pointer: (f64, f64),
    pub mounted: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            expanded: Some(config::DEFAULT_PANEL),
            copied: None,
            copy_generation: 0,
            scroll_progress: 0.0,
            pointer: (0.0, 0.0),
            mounted: true,
        }
    }
}

impl PageState {
    pub fn is_expanded(&self, panel: Panel) -> bool {
        self.expanded == Some(panel)
    }

    pub fn is_copied(&self, key: CopyKey) -> bool {
        self.copied == Some(key)
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if !self.mounted {
            return self;
        }

        let mut next = (*self).clone();
        match action {
            PageAction::TogglePanel(panel) => {
                next.expanded = if self.is_expanded(panel) { None } else { Some(panel) };
            }
            PageAction::Copied { key, generation } => {
                next.copied = Some(key);
                next.copy_generation = generation;
            }
            PageAction::ExpireCopy(generation) => {
                if generation != self.copy_generation || self.copied.is_none() {
                    return self;
                }
                next.copied = None;
            }
            PageAction::Scrolled(metrics) => {
                let progress = metrics.progress();
                if progress == self.scroll_progress {
                    return self;
                }
                next.scroll_progress = progress;
            }
            PageAction::PointerMoved { x, y } => {
                next.pointer = (x, y);
            }
            PageAction::Teardown => {
                next.mounted = false;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<PageState>, actions: Vec<PageAction>) -> Rc<PageState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn copied(key: CopyKey, generation: u64) -> PageAction {
        PageAction::Copied { key, generation }
    }

    fn metrics(scroll_top: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_top, viewport_height, document_height }
    }

    #[test]
    fn default_load_opens_misr_only() {
        let state = PageState::default();
        assert!(state.is_expanded(Panel::Misr));
        assert!(!state.is_expanded(Panel::Saib));
        assert!(!state.is_expanded(Panel::Instapay));
        assert_eq!(state.copied, None);
        assert_eq!(state.scroll_progress, 0.0);
    }

    #[test]
    fn toggling_another_panel_closes_the_open_one() {
        let state = Rc::new(PageState::default()).reduce(PageAction::TogglePanel(Panel::Saib));
        assert!(state.is_expanded(Panel::Saib));
        assert!(!state.is_expanded(Panel::Misr));
    }

    #[test]
    fn toggling_the_open_panel_collapses_everything() {
        let state = Rc::new(PageState::default()).reduce(PageAction::TogglePanel(Panel::Misr));
        assert_eq!(state.expanded, None);
        assert!(Panel::ALL.iter().all(|p| !state.is_expanded(*p)));
    }

    #[test]
    fn at_most_one_panel_open_for_any_toggle_sequence() {
        let sequence = [
            Panel::Saib,
            Panel::Saib,
            Panel::Instapay,
            Panel::Misr,
            Panel::Misr,
            Panel::Misr,
            Panel::Instapay,
            Panel::Saib,
        ];
        let mut state = Rc::new(PageState::default());
        for panel in sequence {
            state = state.reduce(PageAction::TogglePanel(panel));
            let open = Panel::ALL.iter().filter(|p| state.is_expanded(**p)).count();
            assert!(open <= 1);
        }
        assert!(state.is_expanded(Panel::Saib));
    }

    #[test]
    fn copied_key_expires_with_its_own_timer() {
        let state = Rc::new(PageState::default()).reduce(copied(CopyKey::MisrAccount, 1));
        assert_eq!(state.copied.map(|k| k.as_str()), Some("misr-account"));

        let generation = state.copy_generation;
        let state = state.reduce(PageAction::ExpireCopy(generation));
        assert_eq!(state.copied, None);
    }

    #[test]
    fn newer_copy_preempts_the_pending_clear() {
        let state = Rc::new(PageState::default()).reduce(copied(CopyKey::MisrAccount, 1));
        let first = state.copy_generation;
        let state = state.reduce(copied(CopyKey::SaibAccount, 2));
        let second = state.copy_generation;
        assert_eq!(state.copied, Some(CopyKey::SaibAccount));

        // The first timer firing late must not clear the second key.
        let state = state.reduce(PageAction::ExpireCopy(first));
        assert_eq!(state.copied, Some(CopyKey::SaibAccount));

        let state = state.reduce(PageAction::ExpireCopy(second));
        assert_eq!(state.copied, None);
    }

    #[test]
    fn copying_the_same_key_again_restarts_its_lifetime() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![
                copied(CopyKey::MisrIban, 1),
                copied(CopyKey::MisrIban, 2),
            ],
        );
        let state = state.reduce(PageAction::ExpireCopy(1));
        assert!(state.is_copied(CopyKey::MisrIban));
        let state = state.reduce(PageAction::ExpireCopy(2));
        assert!(!state.is_copied(CopyKey::MisrIban));
    }

    #[test]
    fn nothing_mutates_after_teardown() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![copied(CopyKey::AccountNameArabic, 1), PageAction::Teardown],
        );
        let generation = state.copy_generation;
        let after = apply(
            state.clone(),
            vec![
                PageAction::ExpireCopy(generation),
                PageAction::TogglePanel(Panel::Instapay),
                PageAction::Scrolled(metrics(100.0, 100.0, 300.0)),
                PageAction::PointerMoved { x: 5.0, y: 6.0 },
            ],
        );
        assert!(Rc::ptr_eq(&state, &after));
        assert!(after.is_copied(CopyKey::AccountNameArabic));
    }

    #[test]
    fn progress_is_zero_when_page_does_not_scroll() {
        assert_eq!(metrics(0.0, 800.0, 800.0).progress(), 0.0);
        assert_eq!(metrics(250.0, 800.0, 600.0).progress(), 0.0);
        assert_eq!(metrics(250.0, 0.0, 0.0).progress(), 0.0);
    }

    #[test]
    fn progress_at_boundaries() {
        assert_eq!(metrics(0.0, 500.0, 1500.0).progress(), 0.0);
        assert_eq!(metrics(500.0, 500.0, 1500.0).progress(), 50.0);
        assert_eq!(metrics(1000.0, 500.0, 1500.0).progress(), 100.0);
    }

    #[test]
    fn progress_is_clamped_during_overscroll() {
        assert_eq!(metrics(1200.0, 500.0, 1500.0).progress(), 100.0);
        assert_eq!(metrics(-40.0, 500.0, 1500.0).progress(), 0.0);
        assert_eq!(metrics(f64::NAN, 500.0, 1500.0).progress(), 0.0);
    }

    #[test]
    fn pointer_tracks_latest_move() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![
                PageAction::PointerMoved { x: 10.0, y: 20.0 },
                PageAction::PointerMoved { x: 640.0, y: 360.0 },
            ],
        );
        assert_eq!(state.pointer, (640.0, 360.0));
    }
}
