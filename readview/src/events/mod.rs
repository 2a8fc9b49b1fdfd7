use iced::{Size, Task, window};

use crate::app::App;
use crate::widgets::article_params::ArticleParamsEvent;

pub(crate) mod article_params;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Article params widget
    ArticleParams(ArticleParamsEvent),
    // Direct operations
    Window(window::Event),
}

pub(crate) fn handle(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::ArticleParams(event) => article_params::handle(app, event),
        AppEvent::Window(window::Event::Opened { size, .. }) => {
            handle_resize(app, size)
        },
        AppEvent::Window(window::Event::Resized(size)) => {
            handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}

fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if app.state.set_window_size(size) {
        log::debug!("window too narrow for the params panel, closing it");
        return article_params::set_open(false);
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use iced::{Size, window};

    use super::{AppEvent, handle};
    use crate::app::App;
    use crate::config::ReaderConfig;

    #[test]
    fn given_resize_event_when_handled_then_window_size_is_tracked() {
        let mut app = App::with_config(ReaderConfig::default());
        let size = Size::new(1024.0, 640.0);

        let _task =
            handle(&mut app, AppEvent::Window(window::Event::Resized(size)));

        assert_eq!(app.state.window_size, size);
    }

    #[test]
    fn given_unrelated_window_event_when_handled_then_state_is_untouched() {
        let mut app = App::with_config(ReaderConfig::default());
        let before = app.state.window_size;

        let _task = handle(&mut app, AppEvent::Window(window::Event::Focused));

        assert_eq!(app.state.window_size, before);
    }
}
