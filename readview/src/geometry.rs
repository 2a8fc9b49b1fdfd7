use iced::{Point, Rectangle, Size};

/// Width of the open params panel.
pub(crate) const PANEL_WIDTH: f32 = 616.0;
/// Side length of the square arrow toggle.
pub(crate) const TOGGLE_SIZE: f32 = 48.0;
/// Gap between the toggle and the panel edge or window edge.
pub(crate) const TOGGLE_MARGIN: f32 = 24.0;

/// Narrowest window that shows the open panel next to its toggle.
pub(crate) const PANEL_ROOT_WIDTH: f32 =
    PANEL_WIDTH + 2.0 * TOGGLE_MARGIN + TOGGLE_SIZE;

/// Window-space bounds of the open panel and its toggle.
///
/// A press inside either rectangle counts as inside the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelRoot {
    pub(crate) panel: Rectangle,
    pub(crate) toggle: Rectangle,
}

impl PanelRoot {
    pub(crate) fn contains(&self, point: Point) -> bool {
        self.panel.contains(point) || self.toggle.contains(point)
    }
}

/// Bounds of the open panel inside a window of size `area`.
pub(crate) fn panel_root(area: Size) -> PanelRoot {
    let panel = Rectangle::new(
        Point::ORIGIN,
        Size::new(PANEL_WIDTH.min(area.width), area.height),
    );

    PanelRoot {
        panel,
        toggle: toggle_bounds(true),
    }
}

/// Whether a window of size `area` has room for the open panel.
pub(crate) fn fits_panel(area: Size) -> bool {
    area.width >= PANEL_ROOT_WIDTH
}

/// Bounds of the arrow toggle for the given visibility.
pub(crate) fn toggle_bounds(is_open: bool) -> Rectangle {
    let x = if is_open {
        PANEL_WIDTH + TOGGLE_MARGIN
    } else {
        TOGGLE_MARGIN
    };

    Rectangle::new(
        Point::new(x, TOGGLE_MARGIN),
        Size::new(TOGGLE_SIZE, TOGGLE_SIZE),
    )
}
