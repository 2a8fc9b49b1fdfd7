use iced::widget::{button, container, text};
use iced::{Element, Length, Theme, alignment};

use crate::geometry::TOGGLE_SIZE;
use crate::style;
use crate::widgets::article_params::event::{
    ArticleParamsEvent, ArticleParamsIntent,
};

const ARROW_FONT_SIZE: f32 = 20.0;

/// Props for the panel toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrowButtonProps {
    pub(crate) is_open: bool,
}

/// Render the round arrow that opens and closes the params panel.
pub(crate) fn view(
    props: ArrowButtonProps,
) -> Element<'static, ArticleParamsEvent, Theme, iced::Renderer> {
    let glyph = if props.is_open { "\u{2190}" } else { "\u{2192}" };

    let content = container(text(glyph).size(ARROW_FONT_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(ArticleParamsEvent::Intent(ArticleParamsIntent::Toggle))
        .padding(0)
        .width(Length::Fixed(TOGGLE_SIZE))
        .height(Length::Fixed(TOGGLE_SIZE))
        .style(|_, status| style::arrow_button_style(status))
        .into()
}
