use gpui::{App, Hsla, rgb};
use gpui_component::Theme;
use tracing::debug;

use super::FormStyle;

/// Colors the form paints with directly, on top of the component theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormPalette {
    pub accent: Hsla,
    pub header_bg: Hsla,
    pub header_fg: Hsla,
    pub surface: Hsla,
    pub border: Hsla,
    pub text: Hsla,
    pub muted_text: Hsla,
    pub result_accent: Hsla,
    pub result_bg: Hsla,
    pub error_text: Hsla,
    pub error_bg: Hsla,
}

fn hex(value: u32) -> Hsla {
    rgb(value).into()
}

impl FormPalette {
    pub fn for_style(style: FormStyle) -> Self {
        match style {
            FormStyle::Classic => Self {
                accent: hex(0x2563eb),
                header_bg: hex(0xf8fafc),
                header_fg: hex(0x111827),
                surface: hex(0xffffff),
                border: hex(0xe5e7eb),
                text: hex(0x111827),
                muted_text: hex(0x4b5563),
                result_accent: hex(0x059669),
                result_bg: hex(0xecfdf5),
                error_text: hex(0xb91c1c),
                error_bg: hex(0xfef2f2),
            },
            FormStyle::Hero => Self {
                accent: hex(0x2563eb),
                header_bg: hex(0x3b82f6),
                header_fg: hex(0xffffff),
                surface: hex(0xffffff),
                border: hex(0xbfdbfe),
                text: hex(0x111827),
                muted_text: hex(0x6b7280),
                result_accent: hex(0x2563eb),
                result_bg: hex(0xeff6ff),
                error_text: hex(0xb91c1c),
                error_bg: hex(0xfef2f2),
            },
        }
    }
}

/// Shifts lightness toward 50% for hover states.
fn hover_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.05 } else { 0.05 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn active_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.10 } else { 0.10 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

/// Maps the style's palette onto the gpui-component global theme so buttons,
/// inputs and checkboxes match the hand-painted parts of the form.
///
/// Call after `gpui_component::init(cx)`.
pub fn apply_form_style(
    style: FormStyle,
    cx: &mut App,
) {
    let palette = FormPalette::for_style(style);
    let colors = &mut Theme::global_mut(cx).colors;

    colors.primary = palette.accent;
    colors.primary_hover = hover_variant(palette.accent);
    colors.primary_active = active_variant(palette.accent);
    colors.ring = palette.accent;
    colors.caret = palette.accent;

    colors.border = palette.border;
    colors.input = palette.border;

    colors.danger = palette.error_text;
    colors.success = palette.result_accent;

    debug!(?style, "form style applied to theme");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hero_header_is_a_colored_band() {
        let hero = FormPalette::for_style(FormStyle::Hero);
        let classic = FormPalette::for_style(FormStyle::Classic);

        assert_eq!(hero.header_fg, hex(0xffffff));
        assert!(hero.header_bg.l < classic.header_bg.l);
    }

    #[test]
    fn both_styles_share_the_accent() {
        assert_eq!(
            FormPalette::for_style(FormStyle::Hero).accent,
            FormPalette::for_style(FormStyle::Classic).accent
        );
    }

    #[test]
    fn hover_variant_moves_toward_middle() {
        let dark = Hsla {
            h: 0.6,
            s: 0.8,
            l: 0.3,
            a: 1.0,
        };
        let light = Hsla { l: 0.9, ..dark };

        assert!(hover_variant(dark).l > dark.l);
        assert!(hover_variant(light).l < light.l);
        assert!(active_variant(light).l < hover_variant(light).l);
    }
}
