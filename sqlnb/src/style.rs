use iced::widget::{container, scrollable};
use iced::{Background, Border, Color};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

/// Colors shared by every sidebar and shell view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) rail: Color,
    pub(crate) pane: Color,
    pub(crate) overlay: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) running: Color,
    pub(crate) warning: Color,
}

impl Palette {
    pub(crate) const DARK: Palette = Palette {
        background: rgb(0x1e, 0x1f, 0x22),
        rail: rgb(0x17, 0x18, 0x1b),
        pane: rgb(0x23, 0x25, 0x29),
        overlay: rgb(0x33, 0x36, 0x3c),
        foreground: rgb(0xd8, 0xdb, 0xe0),
        dim_foreground: rgb(0x8b, 0x90, 0x99),
        accent: rgb(0x4c, 0x9a, 0xff),
        dim_accent: rgb(0x2b, 0x4d, 0x7a),
        running: rgb(0x5c, 0xc8, 0x7a),
        warning: rgb(0xe5, 0xb5, 0x67),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DARK
    }
}

/// Thin square-cornered scrollbar used by pane lists.
pub(crate) fn thin_scroll_style(
    palette: Palette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = palette.dim_foreground;
        scroller_color.a = 0.5;
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Background for a list row given its selection and hover flags.
pub(crate) fn list_row_style(
    palette: &Palette,
    is_selected: bool,
    is_hovered: bool,
) -> container::Style {
    let background = if is_selected {
        let mut color = palette.dim_accent;
        color.a = 0.7;
        Some(color.into())
    } else if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

/// Detail pane surface.
pub(crate) fn pane_style(
    palette: Palette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.pane.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 0.0,
            color: palette.overlay,
            radius: iced::border::Radius::new(0.0),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, list_row_style};

    #[test]
    fn given_selected_and_hovered_row_when_styled_then_selection_wins() {
        let palette = Palette::DARK;

        let style = list_row_style(&palette, true, true);

        let mut expected = palette.dim_accent;
        expected.a = 0.7;
        assert_eq!(style.background, Some(expected.into()));
    }

    #[test]
    fn given_idle_row_when_styled_then_background_is_transparent() {
        let style = list_row_style(&Palette::DARK, false, false);

        assert!(style.background.is_none());
    }
}
