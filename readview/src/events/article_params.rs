use iced::Task;

use super::AppEvent;
use crate::app::App;
use crate::fonts;
use crate::widgets::article_params::{
    ArticleParamsCtx, ArticleParamsEffect, ArticleParamsEvent,
    ArticleParamsIntent,
};

pub(crate) fn handle(
    app: &mut App,
    event: ArticleParamsEvent,
) -> Task<AppEvent> {
    match event {
        ArticleParamsEvent::Intent(event) => {
            let ctx = ArticleParamsCtx {
                area: app.state.window_size,
            };
            app.widgets
                .article_params
                .reduce(event, &ctx)
                .map(AppEvent::ArticleParams)
        },
        ArticleParamsEvent::Effect(effect) => handle_effect(app, effect),
    }
}

fn handle_effect(
    app: &mut App,
    effect: ArticleParamsEffect,
) -> Task<AppEvent> {
    use ArticleParamsEffect::*;

    match effect {
        Applied(article) => {
            let previous_family = app.state.article.font_family();
            if app.state.set_article(article) {
                log::debug!("article presentation updated");
            }
            if article.font_family() != previous_family {
                fonts::log_family_resolution(article.font_family());
            }
            dispatch(ArticleParamsIntent::Sync(article))
        },
        VisibilityRequested(requested) => {
            let open = app.state.request_params_open(requested);
            if open != requested {
                log::debug!("params panel open request refused by owner");
            }
            set_open(open)
        },
    }
}

/// Push the owner's visibility flag into the panel.
pub(super) fn set_open(open: bool) -> Task<AppEvent> {
    dispatch(ArticleParamsIntent::SetOpen(open))
}

fn dispatch(intent: ArticleParamsIntent) -> Task<AppEvent> {
    Task::done(AppEvent::ArticleParams(ArticleParamsEvent::Intent(intent)))
}
