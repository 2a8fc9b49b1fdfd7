use iced::widget::{Stack, container, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::geometry::TOGGLE_MARGIN;
use crate::widgets::article::model::SAMPLE_ARTICLE;
use crate::widgets::article::view::article_page::{self, ArticlePageProps};
use crate::widgets::article_params::view::arrow_button::{
    self, ArrowButtonProps,
};
use crate::widgets::article_params::view::params_form::{
    self, ParamsFormProps,
};

/// Render the root application view: the article page with the params
/// panel and its toggle layered on top.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let page = article_page::view::<AppEvent>(ArticlePageProps {
        article: &app.state.article,
        content: SAMPLE_ARTICLE,
    });

    let vm = app.widgets.article_params.vm();
    let panel =
        params_form::view(ParamsFormProps { vm }).map(AppEvent::ArticleParams);
    let toggle = container(
        arrow_button::view(ArrowButtonProps {
            is_open: vm.is_open,
        })
        .map(AppEvent::ArticleParams),
    )
    .padding(TOGGLE_MARGIN);

    let overlay: Element<'_, AppEvent, Theme, iced::Renderer> =
        row![panel, toggle].height(Length::Fill).into();

    Stack::with_children([page, overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
