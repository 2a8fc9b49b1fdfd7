use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Row, Space, button, column, container, pick_list, radio, row,
    scrollable, text,
};
use iced::{Element, Length, Theme, alignment};

use crate::fonts;
use crate::geometry::PANEL_WIDTH;
use crate::style::{self, ButtonKind};
use crate::widgets::article_params::event::{
    ArticleParamsEvent, ArticleParamsIntent,
};
use crate::widgets::article_params::model::{
    ArticleField, ArticleParamsViewModel,
};

const TITLE: &str = "SET THE PARAMETERS";
const TITLE_FONT_SIZE: f32 = 31.0;

const FORM_PADDING: f32 = 48.0;
const FORM_SECTION_SPACING: f32 = 50.0;
const FIELD_SPACING: f32 = 12.0;
const FIELD_LABEL_SIZE: f32 = 12.0;
const FIELD_TEXT_SIZE: f32 = 18.0;
const RADIO_SPACING: f32 = 24.0;

const SEPARATOR_HEIGHT: f32 = 1.0;

const ACTION_BUTTON_HEIGHT: f32 = 48.0;
const ACTION_BUTTON_PADDING_X: f32 = 24.0;
const ACTION_BUTTON_SPACING: f32 = 16.0;
const ACTION_FONT_SIZE: f32 = 16.0;

/// Props for the article params form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParamsFormProps<'a> {
    pub(crate) vm: ArticleParamsViewModel<'a>,
}

/// Render the side panel with the draft pickers and the form actions.
pub(crate) fn view(
    props: ParamsFormProps<'_>,
) -> Element<'_, ArticleParamsEvent, Theme, iced::Renderer> {
    if !props.vm.is_open {
        return container(Space::new())
            .width(Length::Shrink)
            .height(Length::Fill)
            .into();
    }

    let title = text(TITLE)
        .size(TITLE_FONT_SIZE)
        .font(fonts::HEADING)
        .wrapping(Wrapping::None);

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(style::separator_style);

    let form = column![
        title,
        select_field(&props, ArticleField::FontFamily),
        radio_field(&props, ArticleField::FontSize),
        select_field(&props, ArticleField::FontColor),
        separator,
        select_field(&props, ArticleField::BackgroundColor),
        select_field(&props, ArticleField::ContentWidth),
        actions(),
    ]
    .spacing(FORM_SECTION_SPACING)
    .padding(FORM_PADDING)
    .width(Length::Fill);

    let scrollable = scrollable::Scrollable::new(form)
        .width(Length::Fill)
        .height(Length::Fill);

    container(scrollable)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .style(style::panel_style)
        .into()
}

fn field_label<'a>(
    field: ArticleField,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    text(field.title().to_uppercase())
        .size(FIELD_LABEL_SIZE)
        .font(fonts::HEADING)
        .wrapping(Wrapping::None)
        .into()
}

fn select_field<'a>(
    props: &ParamsFormProps<'a>,
    field: ArticleField,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let selector = pick_list(
        field.options(),
        Some(props.vm.draft.get(field)),
        move |option| {
            ArticleParamsEvent::Intent(ArticleParamsIntent::FieldChanged {
                field,
                option,
            })
        },
    )
    .font(fonts::UI)
    .text_size(FIELD_TEXT_SIZE)
    .width(Length::Fill);

    column![field_label(field), selector]
        .spacing(FIELD_SPACING)
        .into()
}

fn radio_field<'a>(
    props: &ParamsFormProps<'a>,
    field: ArticleField,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let selected = props.vm.draft.get(field);

    let mut group = Row::new()
        .spacing(RADIO_SPACING)
        .align_y(alignment::Vertical::Center);
    for option in field.options() {
        let choice =
            radio(option.title(), *option, Some(selected), move |option| {
                ArticleParamsEvent::Intent(ArticleParamsIntent::FieldChanged {
                    field,
                    option,
                })
            })
        .font(fonts::UI)
        .text_size(FIELD_TEXT_SIZE);
        group = group.push(choice);
    }

    Column::new()
        .push(field_label(field))
        .push(group)
        .spacing(FIELD_SPACING)
        .into()
}

fn actions<'a>() -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let reset =
        action_button("Reset", ButtonKind::Clear, ArticleParamsIntent::Reset);
    let apply =
        action_button("Apply", ButtonKind::Apply, ArticleParamsIntent::Submit);

    let buttons = row![reset, apply].spacing(ACTION_BUTTON_SPACING);

    container(buttons)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    kind: ButtonKind,
    intent: ArticleParamsIntent,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let content = container(
        text(label.to_uppercase())
            .size(ACTION_FONT_SIZE)
            .font(fonts::HEADING),
    )
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(ArticleParamsEvent::Intent(intent))
        .padding([0.0, ACTION_BUTTON_PADDING_X])
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .style(move |_, status| style::action_button_style(kind, status))
        .into()
}
