use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    // Present only while the params panel holds its outside-press watcher.
    let params_subs = app
        .widgets
        .article_params
        .subscription()
        .map(AppEvent::ArticleParams);

    Subscription::batch([win_subs, params_subs])
}
