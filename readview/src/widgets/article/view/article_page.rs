use iced::widget::{Column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use crate::fonts;
use crate::style;
use crate::widgets::article::model::ArticleContent;
use crate::widgets::article_params::model::ArticleState;

const PAGE_PADDING: f32 = 64.0;
const TITLE_SCALE: f32 = 1.8;
const PARAGRAPH_SPACING_SCALE: f32 = 1.2;

/// Props for the article page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticlePageProps<'a> {
    pub(crate) article: &'a ArticleState,
    pub(crate) content: ArticleContent,
}

/// Render the article with the applied presentation snapshot.
pub(crate) fn view<'a, Message: 'a>(
    props: ArticlePageProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let font = fonts::article_font(props.article.font_family());
    let size = props.article.font_size_px();
    let color = style::color_or(
        props.article.font_color().value(),
        iced::Color::BLACK,
    );
    let background = style::color_or(
        props.article.background_color().value(),
        iced::Color::WHITE,
    );

    let title = text(props.content.title)
        .font(font)
        .size(size * TITLE_SCALE)
        .style(move |_| iced::widget::text::Style { color: Some(color) });

    let mut body = Column::new()
        .push(title)
        .spacing(size * PARAGRAPH_SPACING_SCALE)
        .width(Length::Fill)
        .max_width(props.article.content_width_px());
    for paragraph in props.content.paragraphs {
        body = body.push(
            text(*paragraph)
                .font(font)
                .size(size)
                .style(move |_| iced::widget::text::Style {
                    color: Some(color),
                }),
        );
    }

    let centered = container(body)
        .width(Length::Fill)
        .padding(PAGE_PADDING)
        .align_x(alignment::Horizontal::Center);

    container(scrollable::Scrollable::new(centered))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            text_color: Some(color),
            ..Default::default()
        })
        .into()
}
