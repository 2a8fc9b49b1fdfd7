use iced::Point;

use super::model::{ArticleField, ArticleOption, ArticleState};
use super::watcher::{DismissWatcher, WatchToken};

/// Visibility of the params panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    pub(crate) fn from_open(open: bool) -> Self {
        if open {
            PanelVisibility::Open
        } else {
            PanelVisibility::Closed
        }
    }

    pub(crate) fn is_open(self) -> bool {
        self == PanelVisibility::Open
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            PanelVisibility::Closed => PanelVisibility::Open,
            PanelVisibility::Open => PanelVisibility::Closed,
        }
    }
}

/// Who holds the authoritative visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum VisibilityMode {
    /// The panel flips its own flag.
    #[default]
    PanelOwned,
    /// The owner holds the flag; the panel requests changes and mirrors it.
    OwnerControlled,
}

/// Draft, visibility and listener state of the params panel.
#[derive(Debug)]
pub(crate) struct ArticleParamsState {
    draft: ArticleState,
    visibility: PanelVisibility,
    mode: VisibilityMode,
    watcher: DismissWatcher,
    cursor: Option<Point>,
    /// Visibility asked of the owner and not yet answered.
    pending_request: Option<bool>,
}

impl ArticleParamsState {
    pub(crate) fn new(snapshot: ArticleState, mode: VisibilityMode) -> Self {
        Self {
            draft: snapshot,
            visibility: PanelVisibility::Closed,
            mode,
            watcher: DismissWatcher::default(),
            cursor: None,
            pending_request: None,
        }
    }

    pub(crate) fn draft(&self) -> &ArticleState {
        &self.draft
    }

    pub(crate) fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub(crate) fn mode(&self) -> VisibilityMode {
        self.mode
    }

    pub(crate) fn watch_token(&self) -> Option<WatchToken> {
        self.watcher.active()
    }

    pub(crate) fn is_watching(&self, token: WatchToken) -> bool {
        self.watcher.is_current(token)
    }

    pub(crate) fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub(crate) fn set_field(
        &mut self,
        field: ArticleField,
        option: ArticleOption,
    ) {
        debug_assert!(field.contains(option), "{option} is not a {field}");
        self.draft.set(field, option);
    }

    /// Overwrite the draft with the owner's snapshot.
    ///
    /// Returns `true` when unsaved edits were discarded.
    pub(crate) fn sync_external(&mut self, snapshot: ArticleState) -> bool {
        let discarded = self.draft != snapshot;
        self.draft = snapshot;
        discarded
    }

    /// Move to `visibility`, acquiring or releasing the listener to match.
    pub(crate) fn set_visibility(&mut self, visibility: PanelVisibility) {
        if self.visibility == visibility {
            return;
        }

        self.visibility = visibility;
        match visibility {
            PanelVisibility::Open => {
                self.watcher.acquire();
            },
            PanelVisibility::Closed => {
                self.watcher.release();
                self.cursor = None;
            },
        }
    }

    pub(crate) fn update_cursor(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub(crate) fn pending_request(&self) -> Option<bool> {
        self.pending_request
    }

    pub(crate) fn set_pending_request(&mut self, open: Option<bool>) {
        self.pending_request = open;
    }
}
