pub mod specification_form;
pub mod window;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use specification_form::{FormSettings, SpecificationForm};
pub use window::AppWindow;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }

    /// Window size from config, clamped so the form always fits.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            px(config.window_width.max(MIN_WINDOW_WIDTH)),
            px(config.window_height.max(MIN_WINDOW_HEIGHT)),
        )
    }
}

const MIN_WINDOW_WIDTH: f32 = 480.0;
const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .min_w(px(160.))
        .label(label.into())
        .on_click(on_click)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preferences_follow_config() {
        let config = AppConfig {
            window_width: 1024.0,
            window_height: 900.0,
            ..Default::default()
        };

        let prefs = WindowPreferences::from_config(&config);

        assert_eq!(prefs.size.width, px(1024.0));
        assert_eq!(prefs.size.height, px(900.0));
    }

    #[test]
    fn tiny_windows_are_clamped() {
        let config = AppConfig {
            window_width: 10.0,
            window_height: 10.0,
            ..Default::default()
        };

        let prefs = WindowPreferences::from_config(&config);

        assert_eq!(prefs.size.width, px(MIN_WINDOW_WIDTH));
        assert_eq!(prefs.size.height, px(MIN_WINDOW_HEIGHT));
    }
}
