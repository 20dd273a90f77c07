use crate::config::BAR_SIZE;
use crate::palette::ColorName;
use crate::widget::{self, Widget};

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub top: Bar,
}

impl Screen {
    fn with_top_bar(widgets: Vec<Widget>) -> Self {
        Screen {
            top: Bar {
                widgets,
                size: BAR_SIZE,
            },
        }
    }
}

fn date_time_layout() -> Vec<Widget> {
    vec![
        widget::label("DATE", ColorName::Green),
        widget::calendar(),
        widget::spacer(),
        widget::label("TIME", ColorName::Cyan),
        widget::clock(),
        widget::spacer(),
        widget::layout_icon(),
        widget::current_layout(),
    ]
}

fn primary_bar() -> Vec<Widget> {
    let mut widgets = vec![
        widget::group_box(),
        widget::stretch(),
        widget::window_name(),
        widget::stretch(),
        widget::label("CPU", ColorName::Orange),
        widget::cpu(),
        widget::spacer(),
        widget::label("RAM", ColorName::Pink),
        widget::memory(),
        widget::spacer(),
        widget::label("NET", ColorName::Blue),
        widget::network(),
        widget::spacer(),
        widget::label("VOL", ColorName::Yellow),
        widget::volume(),
        widget::spacer(),
    ];
    widgets.extend(date_time_layout());
    widgets
}

fn secondary_bar() -> Vec<Widget> {
    let mut widgets = vec![widget::group_box(), widget::stretch()];
    widgets.extend(date_time_layout());
    widgets
}

pub fn build_screens() -> Vec<Screen> {
    vec![
        Screen::with_top_bar(primary_bar()),
        Screen::with_top_bar(secondary_bar()),
        Screen::with_top_bar(secondary_bar()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(screen: &Screen) -> Vec<&'static str> {
        screen.top.widgets.iter().map(Widget::kind).collect()
    }

    #[test]
    fn test_three_screens_in_order() {
        let screens = build_screens();
        assert_eq!(screens.len(), 3);
        assert_eq!(screens[0].top.widgets.len(), 24);
        assert_eq!(screens[1].top.widgets.len(), 10);
        assert_eq!(screens[1], screens[2]);
        assert!(screens.iter().all(|s| s.top.size == 24));
    }

    #[test]
    fn test_primary_bar_order() {
        let screens = build_screens();
        assert_eq!(
            kinds(&screens[0]),
            vec![
                "GroupBox", "Spacer", "WindowName", "Spacer", "TextBox", "CPU", "Spacer",
                "TextBox", "Memory", "Spacer", "TextBox", "Net", "Spacer", "TextBox",
                "PulseVolume", "Spacer", "TextBox", "Clock", "Spacer", "TextBox", "Clock",
                "Spacer", "CurrentLayoutIcon", "CurrentLayout",
            ]
        );
    }

    #[test]
    fn test_secondary_bar_ends_with_layout() {
        let screens = build_screens();
        let widgets = &screens[1].top.widgets;
        assert_eq!(widgets[0].kind(), "GroupBox");
        assert_eq!(widgets[1], Widget::Spacer { length: None });
        assert_eq!(widgets[2], widget::label("DATE", ColorName::Green));
        assert_eq!(widgets.last(), Some(&widget::current_layout()));
    }
}
