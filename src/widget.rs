use crate::config::{FONT, FONT_SIZE, WIDGET_MARGIN, WIDGET_OPACITY, WIDGET_PADDING};
use crate::palette::ColorName;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDefaults {
    pub font: &'static str,
    pub fontsize: u32,
    pub padding: u32,
    pub background: ColorName,
    pub opacity: f32,
    pub margin: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        WidgetDefaults {
            font: FONT,
            fontsize: FONT_SIZE,
            padding: WIDGET_PADDING,
            background: ColorName::DarkGray,
            opacity: WIDGET_OPACITY,
            margin: WIDGET_MARGIN,
        }
    }
}

/// Colours a widget overrides; `None` falls back to [`WidgetDefaults`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colors {
    pub foreground: Option<ColorName>,
    pub background: Option<ColorName>,
}

impl Colors {
    pub const fn new(foreground: ColorName, background: ColorName) -> Self {
        Colors {
            foreground: Some(foreground),
            background: Some(background),
        }
    }

    pub const fn fg(foreground: ColorName) -> Self {
        Colors {
            foreground: Some(foreground),
            background: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMethod {
    Border,
    Block,
    Text,
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBox {
    pub border_width: u32,
    pub active: ColorName,
    pub inactive: ColorName,
    pub rounded: bool,
    pub padding_x: u32,
    pub padding_y: u32,
    pub margin_x: u32,
    pub margin_y: u32,
    pub this_current_screen_border: ColorName,
    pub this_screen_border: ColorName,
    pub other_current_screen_border: ColorName,
    pub other_screen_border: ColorName,
    pub highlight_color: ColorName,
    pub highlight_method: HighlightMethod,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    GroupBox(GroupBox),
    WindowName { max_chars: usize, colors: Colors },
    TextBox { text: &'static str, colors: Colors },
    Cpu { format: &'static str, colors: Colors },
    /// `None` stretches to fill the remaining bar space.
    Spacer { length: Option<u32> },
    Clock { format: &'static str, colors: Colors },
    CurrentLayoutIcon { scale: f32, colors: Colors },
    CurrentLayout { colors: Colors },
    Memory { format: &'static str, colors: Colors },
    PulseVolume { volume_app: &'static str, colors: Colors },
    Net { format: &'static str, colors: Colors },
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::GroupBox(_) => "GroupBox",
            Widget::WindowName { .. } => "WindowName",
            Widget::TextBox { .. } => "TextBox",
            Widget::Cpu { .. } => "CPU",
            Widget::Spacer { .. } => "Spacer",
            Widget::Clock { .. } => "Clock",
            Widget::CurrentLayoutIcon { .. } => "CurrentLayoutIcon",
            Widget::CurrentLayout { .. } => "CurrentLayout",
            Widget::Memory { .. } => "Memory",
            Widget::PulseVolume { .. } => "PulseVolume",
            Widget::Net { .. } => "Net",
        }
    }

    pub fn colors(&self) -> Colors {
        match self {
            Widget::GroupBox(g) => g.colors,
            Widget::Spacer { .. } => Colors::default(),
            Widget::WindowName { colors, .. }
            | Widget::TextBox { colors, .. }
            | Widget::Cpu { colors, .. }
            | Widget::Clock { colors, .. }
            | Widget::CurrentLayoutIcon { colors, .. }
            | Widget::CurrentLayout { colors }
            | Widget::Memory { colors, .. }
            | Widget::PulseVolume { colors, .. }
            | Widget::Net { colors, .. } => *colors,
        }
    }

    /// Background after applying the bar-wide defaults.
    pub fn background(&self, defaults: &WidgetDefaults) -> ColorName {
        self.colors().background.unwrap_or(defaults.background)
    }
}

pub fn group_box() -> Widget {
    Widget::GroupBox(GroupBox {
        border_width: 5,
        active: ColorName::White,
        inactive: ColorName::White,
        rounded: false,
        padding_x: 3,
        padding_y: 5,
        margin_x: 0,
        margin_y: 3,
        this_current_screen_border: ColorName::Purple,
        this_screen_border: ColorName::White,
        other_current_screen_border: ColorName::Purple,
        other_screen_border: ColorName::White,
        highlight_color: ColorName::DarkGray,
        highlight_method: HighlightMethod::Line,
        colors: Colors::new(ColorName::White, ColorName::DarkGray),
    })
}

pub fn window_name() -> Widget {
    Widget::WindowName {
        max_chars: 60,
        colors: Colors::fg(ColorName::White),
    }
}

pub fn stretch() -> Widget {
    Widget::Spacer { length: None }
}

pub fn spacer() -> Widget {
    Widget::Spacer { length: Some(10) }
}

/// Black label on a coloured block, placed before the value it names.
pub fn label(text: &'static str, background: ColorName) -> Widget {
    Widget::TextBox {
        text,
        colors: Colors::new(ColorName::Black, background),
    }
}

const VALUE: Colors = Colors::new(ColorName::White, ColorName::Purple);

pub fn cpu() -> Widget {
    Widget::Cpu {
        format: "{load_percent}%",
        colors: VALUE,
    }
}

pub fn calendar() -> Widget {
    Widget::Clock {
        format: "%A, %B %d",
        colors: VALUE,
    }
}

pub fn clock() -> Widget {
    Widget::Clock {
        format: "%H:%M",
        colors: VALUE,
    }
}

pub fn layout_icon() -> Widget {
    Widget::CurrentLayoutIcon {
        scale: 0.8,
        colors: Colors::new(ColorName::Black, ColorName::Red),
    }
}

pub fn current_layout() -> Widget {
    Widget::CurrentLayout { colors: VALUE }
}

pub fn memory() -> Widget {
    Widget::Memory {
        format: "{MemUsed: .0f}{mm}",
        colors: VALUE,
    }
}

pub fn volume() -> Widget {
    Widget::PulseVolume {
        volume_app: "pavucontrol",
        colors: VALUE,
    }
}

pub fn network() -> Widget {
    Widget::Net {
        format: "{down}",
        colors: VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_background() {
        let defaults = WidgetDefaults::default();
        assert_eq!(window_name().background(&defaults), ColorName::DarkGray);
        assert_eq!(cpu().background(&defaults), ColorName::Purple);
        assert_eq!(label("CPU", ColorName::Orange).background(&defaults), ColorName::Orange);
    }

    #[test]
    fn test_spacers() {
        assert_eq!(stretch(), Widget::Spacer { length: None });
        assert_eq!(spacer(), Widget::Spacer { length: Some(10) });
        assert_eq!(spacer().colors(), Colors::default());
    }
}
