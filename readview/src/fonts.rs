use iced::Font;
use iced::font::{Family, Weight};

use crate::widgets::article_params::model::ArticleOption;

/// Font used by the panel heading.
pub(crate) const HEADING: Font = Font {
    weight: Weight::ExtraBold,
    family: Family::Name("Open Sans"),
    ..Font::DEFAULT
};

/// Font used by panel labels and controls.
pub(crate) const UI: Font = Font {
    family: Family::Name("Open Sans"),
    ..Font::DEFAULT
};

/// Resolve an article font family option to an iced font.
///
/// The option title is the system family name. iced falls back to its default
/// font when the family is not installed.
pub(crate) fn article_font(option: ArticleOption) -> Font {
    Font::with_name(option.title())
}

/// Report that `option` is looked up among the installed system fonts.
pub(crate) fn log_family_resolution(option: ArticleOption) {
    log::info!(
        "article font family {:?} is resolved from system fonts; \
         iced renders its default font when it is not installed",
        option.title()
    );
}

#[cfg(test)]
mod tests {
    use iced::Font;
    use iced::font::Family;

    use super::article_font;
    use crate::widgets::article_params::model::FONT_FAMILY_OPTIONS;

    #[test]
    fn given_family_option_when_resolved_then_title_is_family_name() {
        let font = article_font(FONT_FAMILY_OPTIONS[2]);

        assert_eq!(font.family, Family::Name("Cormorant Garamond"));
    }

    #[test]
    fn given_every_family_option_when_resolved_then_none_is_left_default() {
        for option in FONT_FAMILY_OPTIONS {
            let font = article_font(option);

            assert_eq!(font.family, Family::Name(option.title()));
            assert_ne!(font.family, Font::DEFAULT.family);
        }
    }
}
