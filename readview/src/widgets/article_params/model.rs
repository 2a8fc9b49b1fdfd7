use std::fmt;

use super::errors::ArticleParamsError;

/// One selectable value of an article presentation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ArticleOption {
    title: &'static str,
    value: &'static str,
}

impl ArticleOption {
    const fn new(title: &'static str, value: &'static str) -> Self {
        Self { title, value }
    }

    /// Human-readable label shown by pickers.
    pub(crate) fn title(&self) -> &'static str {
        self.title
    }

    /// Stable value used for rendering and configuration.
    pub(crate) fn value(&self) -> &'static str {
        self.value
    }
}

impl fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title)
    }
}

pub(crate) const FONT_FAMILY_OPTIONS: [ArticleOption; 5] = [
    ArticleOption::new("Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "days-one"),
    ArticleOption::new("Merriweather", "merriweather"),
];

pub(crate) const FONT_SIZE_OPTIONS: [ArticleOption; 3] = [
    ArticleOption::new("18px", "18px"),
    ArticleOption::new("25px", "25px"),
    ArticleOption::new("38px", "38px"),
];

pub(crate) const FONT_COLORS: [ArticleOption; 9] = [
    ArticleOption::new("Black", "#000000"),
    ArticleOption::new("White", "#FFFFFF"),
    ArticleOption::new("Gray", "#C4C4C4"),
    ArticleOption::new("Pink", "#FEAFE8"),
    ArticleOption::new("Bright pink", "#FD24AF"),
    ArticleOption::new("Yellow", "#FFC802"),
    ArticleOption::new("Green", "#80D994"),
    ArticleOption::new("Light blue", "#6FC1FD"),
    ArticleOption::new("Purple", "#5F34F5"),
];

pub(crate) const BACKGROUND_COLORS: [ArticleOption; 9] = [
    ArticleOption::new("White", "#FFFFFF"),
    ArticleOption::new("Black", "#000000"),
    ArticleOption::new("Gray", "#C4C4C4"),
    ArticleOption::new("Pink", "#FEAFE8"),
    ArticleOption::new("Bright pink", "#FD24AF"),
    ArticleOption::new("Yellow", "#FFC802"),
    ArticleOption::new("Green", "#80D994"),
    ArticleOption::new("Light blue", "#6FC1FD"),
    ArticleOption::new("Purple", "#5F34F5"),
];

pub(crate) const CONTENT_WIDTH_OPTIONS: [ArticleOption; 2] = [
    ArticleOption::new("Wide", "1394px"),
    ArticleOption::new("Narrow", "948px"),
];

/// Presentation fields editable from the params panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    pub(crate) const ALL: [ArticleField; 5] = [
        ArticleField::FontFamily,
        ArticleField::FontSize,
        ArticleField::FontColor,
        ArticleField::BackgroundColor,
        ArticleField::ContentWidth,
    ];

    /// Label shown above the field's picker.
    pub(crate) fn title(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "Font",
            ArticleField::FontSize => "Font size",
            ArticleField::FontColor => "Font color",
            ArticleField::BackgroundColor => "Background color",
            ArticleField::ContentWidth => "Content width",
        }
    }

    /// Key used by the startup configuration file.
    pub(crate) fn key(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "font_family",
            ArticleField::FontSize => "font_size",
            ArticleField::FontColor => "font_color",
            ArticleField::BackgroundColor => "background_color",
            ArticleField::ContentWidth => "content_width",
        }
    }

    /// Full option set of the field.
    pub(crate) fn options(self) -> &'static [ArticleOption] {
        match self {
            ArticleField::FontFamily => &FONT_FAMILY_OPTIONS,
            ArticleField::FontSize => &FONT_SIZE_OPTIONS,
            ArticleField::FontColor => &FONT_COLORS,
            ArticleField::BackgroundColor => &BACKGROUND_COLORS,
            ArticleField::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Look up an option of this field by its value.
    pub(crate) fn option_by_value(
        self,
        value: &str,
    ) -> Result<ArticleOption, ArticleParamsError> {
        self.options()
            .iter()
            .find(|option| option.value().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| ArticleParamsError::UnknownOption {
                field: self,
                value: value.to_string(),
            })
    }

    pub(crate) fn contains(self, option: ArticleOption) -> bool {
        self.options().contains(&option)
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Presentation snapshot applied to the article page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArticleState {
    font_family: ArticleOption,
    font_size: ArticleOption,
    font_color: ArticleOption,
    background_color: ArticleOption,
    content_width: ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

impl ArticleState {
    /// Return the current option of a field.
    pub(crate) fn get(&self, field: ArticleField) -> ArticleOption {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    /// Replace one field. The option is trusted to belong to the field.
    pub(crate) fn set(&mut self, field: ArticleField, option: ArticleOption) {
        let slot = match field {
            ArticleField::FontFamily => &mut self.font_family,
            ArticleField::FontSize => &mut self.font_size,
            ArticleField::FontColor => &mut self.font_color,
            ArticleField::BackgroundColor => &mut self.background_color,
            ArticleField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    pub(crate) fn with(
        mut self,
        field: ArticleField,
        option: ArticleOption,
    ) -> Self {
        self.set(field, option);
        self
    }

    pub(crate) fn font_family(&self) -> ArticleOption {
        self.font_family
    }

    pub(crate) fn font_color(&self) -> ArticleOption {
        self.font_color
    }

    pub(crate) fn background_color(&self) -> ArticleOption {
        self.background_color
    }

    /// Font size in logical pixels.
    pub(crate) fn font_size_px(&self) -> f32 {
        px_value(self.font_size.value()).unwrap_or(DEFAULT_FONT_SIZE_PX)
    }

    /// Maximum article column width in logical pixels.
    pub(crate) fn content_width_px(&self) -> f32 {
        px_value(self.content_width.value())
            .unwrap_or(DEFAULT_CONTENT_WIDTH_PX)
    }
}

const DEFAULT_FONT_SIZE_PX: f32 = 18.0;
const DEFAULT_CONTENT_WIDTH_PX: f32 = 1394.0;

/// Parse a CSS-like pixel value such as `"25px"`.
pub(crate) fn px_value(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Read-only view model for the params panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsViewModel<'a> {
    pub(crate) draft: &'a ArticleState,
    pub(crate) is_open: bool,
}
