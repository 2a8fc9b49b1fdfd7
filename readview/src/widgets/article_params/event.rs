use iced::Point;

use super::model::{ArticleField, ArticleOption, ArticleState};
use super::watcher::WatchToken;

/// Pointer activity reported by the outside-press listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PointerSignal {
    /// Cursor moved to the given window position.
    Moved(Point),
    /// Pointer went down. Touch presses carry their own position.
    Pressed(Option<Point>),
}

/// Intent events handled by the article params reducer.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsIntent {
    /// A picker delivered a new option for one field.
    FieldChanged {
        field: ArticleField,
        option: ArticleOption,
    },
    /// The arrow button was pressed.
    Toggle,
    /// Signal from the outside-press listener identified by `token`.
    Pointer {
        token: WatchToken,
        signal: PointerSignal,
    },
    /// Form submit: hand the draft to the owner.
    Submit,
    /// Form reset: hand the default snapshot to the owner.
    Reset,
    /// The owner's snapshot changed.
    Sync(ArticleState),
    /// The owner set the visibility flag (owner-controlled mode).
    SetOpen(bool),
}

/// Effect events produced by the reducer for the owner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArticleParamsEffect {
    /// A new authoritative snapshot was committed.
    Applied(ArticleState),
    /// Ask the owner to change the visibility flag it holds.
    VisibilityRequested(bool),
}

/// Article params event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsEvent {
    /// Intent event reduced by the widget.
    Intent(ArticleParamsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ArticleParamsEffect),
}
