#[path = "subscription.rs"]
mod subscription;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{self, ConfigLoadStatus, ReaderConfig};
pub(crate) use crate::events::AppEvent;
use crate::fonts;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::article_params::ArticleParamsWidget;

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1440.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        (Self::with_config(startup_config()), Task::none())
    }

    /// Build the app from an already loaded configuration.
    pub(crate) fn with_config(config: ReaderConfig) -> Self {
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        log::info!(
            "article params panel starts closed in {:?} mode",
            config.visibility_mode
        );
        fonts::log_family_resolution(config.article.font_family());

        Self {
            state: State::new(window_size, config.article),
            widgets: Widgets {
                article_params: ArticleParamsWidget::new(
                    config.article,
                    config.visibility_mode,
                ),
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("readview")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        crate::events::handle(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn startup_config() -> ReaderConfig {
    let load = match config::load_config() {
        Ok(load) => load,
        Err(err) => {
            log::warn!("config read failed: {err}");
            return ReaderConfig::default();
        },
    };

    let (config, status) = load.into_parts();
    match &status {
        ConfigLoadStatus::Loaded => log::info!("config loaded"),
        ConfigLoadStatus::Missing => {
            log::debug!("no config file, using defaults");
        },
        ConfigLoadStatus::Invalid(message) => {
            log::warn!("config file invalid: {message}");
        },
    }
    config
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::ReaderConfig;
    use crate::widgets::article_params::VisibilityMode;
    use crate::widgets::article_params::model::{
        ArticleField, ArticleState, CONTENT_WIDTH_OPTIONS,
    };

    #[test]
    fn given_config_when_app_built_then_owner_and_draft_share_snapshot() {
        let article = ArticleState::default()
            .with(ArticleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1]);

        let app = App::with_config(ReaderConfig {
            visibility_mode: VisibilityMode::OwnerControlled,
            article,
        });

        assert_eq!(app.state.article, article);
        assert_eq!(app.widgets.article_params.vm().draft, &article);
        assert!(!app.widgets.article_params.is_open());
        assert!(!app.state.params_open);
    }
}
