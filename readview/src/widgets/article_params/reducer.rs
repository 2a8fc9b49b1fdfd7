use iced::{Size, Task};

use super::event::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
    PointerSignal,
};
use super::model::ArticleState;
use super::state::{ArticleParamsState, PanelVisibility, VisibilityMode};
use super::watcher::WatchToken;
use crate::geometry;

/// Read-only context for article params reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsCtx {
    /// Current window size, used to hit-test outside presses.
    pub(crate) area: Size,
}

/// Reduce an article params intent into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ArticleParamsState,
    event: ArticleParamsIntent,
    ctx: &ArticleParamsCtx,
) -> Task<ArticleParamsEvent> {
    let effects = transition(state, event, ctx);
    if effects.is_empty() {
        return Task::none();
    }

    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(ArticleParamsEvent::Effect(effect))),
    )
}

fn transition(
    state: &mut ArticleParamsState,
    event: ArticleParamsIntent,
    ctx: &ArticleParamsCtx,
) -> Vec<ArticleParamsEffect> {
    match event {
        ArticleParamsIntent::FieldChanged { field, option } => {
            state.set_field(field, option);
            Vec::new()
        },
        ArticleParamsIntent::Toggle => {
            let next = state.visibility().toggled();
            request_visibility(state, next)
        },
        ArticleParamsIntent::Pointer { token, signal } => {
            handle_pointer(state, token, signal, ctx)
        },
        ArticleParamsIntent::Submit => {
            let draft = *state.draft();
            log::info!("article params applied: {draft:?}");
            commit(state, draft)
        },
        ArticleParamsIntent::Reset => {
            log::info!("article params reset to defaults");
            commit(state, ArticleState::default())
        },
        ArticleParamsIntent::Sync(snapshot) => {
            if state.sync_external(snapshot) {
                log::debug!("unsaved article params edits discarded");
            }
            Vec::new()
        },
        ArticleParamsIntent::SetOpen(open) => {
            state.set_pending_request(None);
            state.set_visibility(PanelVisibility::from_open(open));
            Vec::new()
        },
    }
}

fn commit(
    state: &mut ArticleParamsState,
    snapshot: ArticleState,
) -> Vec<ArticleParamsEffect> {
    let mut effects = vec![ArticleParamsEffect::Applied(snapshot)];
    effects.extend(request_visibility(state, PanelVisibility::Closed));
    effects
}

fn request_visibility(
    state: &mut ArticleParamsState,
    next: PanelVisibility,
) -> Vec<ArticleParamsEffect> {
    if state.visibility() == next {
        return Vec::new();
    }

    match state.mode() {
        VisibilityMode::PanelOwned => {
            state.set_visibility(next);
            Vec::new()
        },
        VisibilityMode::OwnerControlled => {
            let open = next.is_open();
            if state.pending_request() == Some(open) {
                return Vec::new();
            }
            state.set_pending_request(Some(open));
            vec![ArticleParamsEffect::VisibilityRequested(open)]
        },
    }
}

fn handle_pointer(
    state: &mut ArticleParamsState,
    token: WatchToken,
    signal: PointerSignal,
    ctx: &ArticleParamsCtx,
) -> Vec<ArticleParamsEffect> {
    if !state.is_watching(token) {
        log::debug!("ignoring pointer signal from stale watcher {token}");
        return Vec::new();
    }

    match signal {
        PointerSignal::Moved(position) => {
            state.update_cursor(position);
            Vec::new()
        },
        PointerSignal::Pressed(position) => {
            let Some(position) = position.or(state.cursor()) else {
                return Vec::new();
            };
            if geometry::panel_root(ctx.area).contains(position) {
                return Vec::new();
            }

            log::debug!("outside press at {position:?}, dismissing panel");
            request_visibility(state, PanelVisibility::Closed)
        },
    }
}
