use iced::Size;

use crate::geometry;
use crate::widgets::article_params::model::ArticleState;

/// Owner-side state: the window geometry and the authoritative article
/// presentation.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    pub(crate) article: ArticleState,
    /// Panel visibility held by the owner in owner-controlled mode.
    pub(crate) params_open: bool,
}

impl State {
    pub(crate) fn new(window_size: Size, article: ArticleState) -> Self {
        Self {
            window_size,
            article,
            params_open: false,
        }
    }

    /// Replace the applied snapshot. Returns `true` when it changed.
    pub(crate) fn set_article(&mut self, article: ArticleState) -> bool {
        let changed = self.article != article;
        self.article = article;
        changed
    }

    /// Answer a panel visibility request and return the flag now held.
    ///
    /// Closing is always granted. Opening is refused while the window is too
    /// narrow for the panel.
    pub(crate) fn request_params_open(&mut self, open: bool) -> bool {
        self.params_open = open && geometry::fits_panel(self.window_size);
        self.params_open
    }

    /// Track the window size. Returns `true` when an open panel no longer
    /// fits and the owner flag was cleared.
    pub(crate) fn set_window_size(&mut self, size: Size) -> bool {
        self.window_size = size;
        if self.params_open && !geometry::fits_panel(size) {
            self.params_open = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::State;
    use crate::widgets::article_params::model::ArticleState;

    const WIDE: Size = Size::new(1440.0, 900.0);
    const NARROW: Size = Size::new(640.0, 900.0);

    #[test]
    fn given_wide_window_when_open_requested_then_request_is_granted() {
        let mut state = State::new(WIDE, ArticleState::default());

        assert!(state.request_params_open(true));
        assert!(state.params_open);
        assert!(!state.request_params_open(false));
        assert!(!state.params_open);
    }

    #[test]
    fn given_narrow_window_when_open_requested_then_request_is_refused() {
        let mut state = State::new(NARROW, ArticleState::default());

        assert!(!state.request_params_open(true));
        assert!(!state.params_open);
    }

    #[test]
    fn given_open_flag_when_window_shrinks_then_owner_closes_panel() {
        let mut state = State::new(WIDE, ArticleState::default());
        state.request_params_open(true);

        assert!(state.set_window_size(NARROW));
        assert!(!state.params_open);
        assert!(!state.set_window_size(WIDE));
    }
}
