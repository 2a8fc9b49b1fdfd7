mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;
pub(crate) mod watcher;

pub(crate) use errors::ArticleParamsError;
pub(crate) use event::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
};
use iced::event::Status as EventStatus;
use iced::{Event, Subscription, Task, mouse, touch, window};
use model::{ArticleParamsViewModel, ArticleState};
pub(crate) use reducer::ArticleParamsCtx;
use state::ArticleParamsState;
pub(crate) use state::VisibilityMode;

use event::PointerSignal;
use watcher::WatchToken;

/// Article params widget: a collapsible side form that edits a draft copy of
/// the owner's article presentation and hands it back on apply or reset.
///
/// While open it holds an outside-press watcher; [`Self::subscription`]
/// exposes the matching pointer listener.
pub(crate) struct ArticleParamsWidget {
    state: ArticleParamsState,
}

impl ArticleParamsWidget {
    /// Create a closed panel whose draft mirrors `snapshot`.
    pub(crate) fn new(snapshot: ArticleState, mode: VisibilityMode) -> Self {
        Self {
            state: ArticleParamsState::new(snapshot, mode),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ArticleParamsIntent,
        ctx: &ArticleParamsCtx,
    ) -> Task<ArticleParamsEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Return a read-only view model for the panel views.
    pub(crate) fn vm(&self) -> ArticleParamsViewModel<'_> {
        ArticleParamsViewModel {
            draft: self.state.draft(),
            is_open: self.state.visibility().is_open(),
        }
    }

    /// Pointer listener for outside-press dismissal, live only while open.
    pub(crate) fn subscription(&self) -> Subscription<ArticleParamsEvent> {
        let Some(token) = self.listener() else {
            return Subscription::none();
        };

        iced::event::listen_with(pointer_signal).with(token).map(
            |(token, signal): (WatchToken, PointerSignal)| {
                ArticleParamsEvent::Intent(ArticleParamsIntent::Pointer {
                    token,
                    signal,
                })
            },
        )
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.visibility().is_open()
    }

    /// Key of the pointer listener [`Self::subscription`] returns, if any.
    pub(crate) fn listener(&self) -> Option<WatchToken> {
        self.state.watch_token()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &ArticleParamsState {
        &self.state
    }
}

fn pointer_signal(
    event: Event,
    _status: EventStatus,
    _window: window::Id,
) -> Option<PointerSignal> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(PointerSignal::Moved(position))
        },
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            Some(PointerSignal::Pressed(None))
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerSignal::Pressed(Some(position)))
        },
        _ => None,
    }
}
