use log::info;
use xcb::x::ModMask;

use crate::bindings::BindingTable;
use crate::config::{ACTION_MAPPINGS, MOD, TERMINAL, WM_NAME, WORKSPACE_NAMES};
use crate::error::Result;
use crate::float_rules::FloatRules;
use crate::layout::{build_layouts, LayoutSpec};
use crate::mouse::{build_mouse_bindings, MouseBinding};
use crate::palette::Palette;
use crate::screen::{build_screens, Screen};
use crate::widget::WidgetDefaults;

/// A workspace, named by a single character. Order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub name: char,
}

impl Group {
    pub const fn new(name: char) -> Self {
        Group { name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOnActivation {
    Smart,
    Focus,
    Urgent,
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Behavior {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    pub auto_minimize: bool,
    pub wmname: &'static str,
}

impl Default for Behavior {
    fn default() -> Self {
        Behavior {
            follow_mouse_focus: false,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            // respect games that minimize themselves when losing focus
            auto_minimize: true,
            wmname: WM_NAME,
        }
    }
}

/// The complete, immutable desktop profile.
#[derive(Debug, Clone)]
pub struct WmConfig {
    pub modifier: ModMask,
    pub terminal: &'static str,
    pub groups: Vec<Group>,
    pub keys: BindingTable,
    pub layouts: Vec<LayoutSpec>,
    pub floating: FloatRules,
    pub palette: Palette,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub behavior: Behavior,
}

impl WmConfig {
    pub fn build() -> Result<Self> {
        let groups: Vec<Group> = WORKSPACE_NAMES.chars().map(Group::new).collect();
        let keys = BindingTable::build(ACTION_MAPPINGS, &groups, MOD)?;
        let widget_defaults = WidgetDefaults::default();

        let config = WmConfig {
            modifier: MOD,
            terminal: TERMINAL,
            keys,
            layouts: build_layouts()?,
            floating: FloatRules::default(),
            palette: Palette::dracula()?,
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens: build_screens(),
            mouse: build_mouse_bindings(MOD),
            behavior: Behavior::default(),
            groups,
        };

        info!(
            "Built profile: {} groups, {} key bindings, {} layouts, {} screens",
            config.groups.len(),
            config.keys.len(),
            config.layouts.len(),
            config.screens.len()
        );
        Ok(config)
    }

    pub fn group_names(&self) -> String {
        self.groups.iter().map(|g| g.name).collect()
    }

    /// One line per binding, in table order: chord, then description.
    pub fn cheat_sheet(&self) -> String {
        let rows: Vec<(String, &str)> = self
            .keys
            .entries()
            .iter()
            .map(|b| (b.chord_name(), b.description.as_str()))
            .collect();
        let width = rows.iter().map(|(chord, _)| chord.len()).max().unwrap_or(0);

        rows.iter()
            .map(|(chord, desc)| format!("{chord:<width$}  {desc}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE_SIZE;

    #[test]
    fn test_build() {
        let config = WmConfig::build().unwrap();
        assert_eq!(config.modifier, ModMask::N4);
        assert_eq!(config.terminal, "alacritty");
        assert_eq!(config.group_names(), "123456789");
        assert_eq!(config.keys.len(), ACTION_MAPPINGS.len() + 18);
        assert_eq!(config.palette.len(), PALETTE_SIZE);
        assert_eq!(config.screens.len(), 3);
        assert_eq!(config.layouts.len(), 2);
        assert_eq!(config.mouse.len(), 3);
        assert_eq!(config.widget_defaults, config.extension_defaults);
    }

    #[test]
    fn test_behavior_flags() {
        let behavior = WmConfig::build().unwrap().behavior;
        assert!(!behavior.follow_mouse_focus);
        assert!(!behavior.bring_front_click);
        assert!(!behavior.cursor_warp);
        assert!(behavior.auto_fullscreen);
        assert_eq!(behavior.focus_on_window_activation, FocusOnActivation::Smart);
        assert!(behavior.reconfigure_screens);
        assert!(behavior.auto_minimize);
        assert_eq!(behavior.wmname, "LG3D");
    }

    #[test]
    fn test_cheat_sheet() {
        let config = WmConfig::build().unwrap();
        let sheet = config.cheat_sheet();
        let lines: Vec<&str> = sheet.lines().collect();
        assert_eq!(lines.len(), config.keys.len());
        assert!(lines[0].starts_with("mod4 h"));
        assert!(lines[0].ends_with("Move focus to left"));
        assert!(lines
            .last()
            .unwrap()
            .ends_with("Switch to & move focused window to group 9"));
    }
}
