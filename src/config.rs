use crate::key_mapping::{Action, ActionMapping, Direction};
use xcb::x::ModMask;
use xkbcommon::xkb;

pub const MOD: ModMask = ModMask::N4;
pub const TERMINAL: &str = "alacritty";
pub const APP_NAME: &str = "dracula";

pub const WORKSPACE_NAMES: &str = "123456789";

// Advertised through _NET_WM_NAME. Java toolkits only behave with names on their whitelist.
pub const WM_NAME: &str = "LG3D";

pub const BAR_SIZE: u32 = 24;

pub const TILE_RATIO: f32 = 0.5;
pub const TILE_BORDER_FOCUS: &str = "#bd93f9";
pub const TILE_BORDER_WIDTH: u32 = 2;
pub const TILE_MARGIN: u32 = 6;

pub const FONT: &str = "Iosevka Bold";
pub const FONT_SIZE: u32 = 14;
pub const WIDGET_PADDING: u32 = 3;
pub const WIDGET_MARGIN: u32 = 3;
pub const WIDGET_OPACITY: f32 = 0.85;

pub static COLORS: [[&str; 2]; 12] = [
    ["#000000", "#000000"], // black
    ["#ffffff", "#ffffff"], // white
    ["#e4e4e4", "#e4e4e4"], // light gray
    ["#282a36", "#282a36"], // dark gray
    ["#61b1db", "#61b1db"], // blue
    ["#10e5c0", "#10e5c0"], // cyan
    ["#988eca", "#988eca"], // purple
    ["#fcb2e3", "#fcb2e3"], // pink
    ["#51d790", "#51d790"], // green
    ["#ee6388", "#ee6388"], // red
    ["#fffb8d", "#fffb8d"], // yellow
    ["#d1ac00", "#d1ac00"], // orange
];

pub static ACTION_MAPPINGS: &[ActionMapping] = &[
    // focus
    ActionMapping {
        key: xkb::Keysym::h,
        modifiers: &[MOD],
        action: Action::Focus(Direction::Left),
        desc: "Move focus to left",
    },
    ActionMapping {
        key: xkb::Keysym::l,
        modifiers: &[MOD],
        action: Action::Focus(Direction::Right),
        desc: "Move focus to right",
    },
    ActionMapping {
        key: xkb::Keysym::j,
        modifiers: &[MOD],
        action: Action::Focus(Direction::Down),
        desc: "Move focus down",
    },
    ActionMapping {
        key: xkb::Keysym::k,
        modifiers: &[MOD],
        action: Action::Focus(Direction::Up),
        desc: "Move focus up",
    },
    ActionMapping {
        key: xkb::Keysym::space,
        modifiers: &[MOD],
        action: Action::FocusNext,
        desc: "Move window focus to other window",
    },
    // shuffle
    ActionMapping {
        key: xkb::Keysym::h,
        modifiers: &[MOD, ModMask::SHIFT],
        action: Action::Shuffle(Direction::Left),
        desc: "Move window to the left",
    },
    ActionMapping {
        key: xkb::Keysym::l,
        modifiers: &[MOD, ModMask::SHIFT],
        action: Action::Shuffle(Direction::Right),
        desc: "Move window to the right",
    },
    ActionMapping {
        key: xkb::Keysym::j,
        modifiers: &[MOD, ModMask::SHIFT],
        action: Action::Shuffle(Direction::Down),
        desc: "Move window down",
    },
    ActionMapping {
        key: xkb::Keysym::k,
        modifiers: &[MOD, ModMask::SHIFT],
        action: Action::Shuffle(Direction::Up),
        desc: "Move window up",
    },
    // grow
    ActionMapping {
        key: xkb::Keysym::h,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Grow(Direction::Left),
        desc: "Grow window to the left",
    },
    ActionMapping {
        key: xkb::Keysym::l,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Grow(Direction::Right),
        desc: "Grow window to the right",
    },
    ActionMapping {
        key: xkb::Keysym::j,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Grow(Direction::Down),
        desc: "Grow window down",
    },
    ActionMapping {
        key: xkb::Keysym::k,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Grow(Direction::Up),
        desc: "Grow window up",
    },
    ActionMapping {
        key: xkb::Keysym::n,
        modifiers: &[MOD],
        action: Action::Normalize,
        desc: "Reset all window sizes",
    },
    ActionMapping {
        key: xkb::Keysym::Return,
        modifiers: &[MOD, ModMask::SHIFT],
        action: Action::ToggleSplit,
        desc: "Toggle between split and unsplit sides of stack",
    },
    // launchers
    ActionMapping {
        key: xkb::Keysym::Return,
        modifiers: &[MOD],
        action: Action::Spawn(TERMINAL),
        desc: "Launch terminal",
    },
    ActionMapping {
        key: xkb::Keysym::d,
        modifiers: &[MOD],
        action: Action::Spawn("dmenu_run"),
        desc: "Launch dmenu",
    },
    ActionMapping {
        key: xkb::Keysym::p,
        modifiers: &[MOD],
        action: Action::Spawn("rofi -show run"),
        desc: "Launch rofi",
    },
    ActionMapping {
        key: xkb::Keysym::f,
        modifiers: &[MOD],
        action: Action::Spawn("firefox"),
        desc: "Launch Firefox",
    },
    ActionMapping {
        key: xkb::Keysym::Tab,
        modifiers: &[MOD],
        action: Action::NextLayout,
        desc: "Toggle between layouts",
    },
    ActionMapping {
        key: xkb::Keysym::q,
        modifiers: &[MOD],
        action: Action::Kill,
        desc: "Kill focused window",
    },
    // lifecycle
    ActionMapping {
        key: xkb::Keysym::r,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Restart,
        desc: "Restart the window manager",
    },
    ActionMapping {
        key: xkb::Keysym::c,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Shutdown,
        desc: "Shutdown the window manager",
    },
    ActionMapping {
        key: xkb::Keysym::r,
        modifiers: &[MOD],
        action: Action::SpawnPrompt,
        desc: "Spawn a command using a prompt widget",
    },
    ActionMapping {
        key: xkb::Keysym::m,
        modifiers: &[MOD, ModMask::CONTROL],
        action: Action::Spawn("dm-tool lock"),
        desc: "Lock Computer",
    },
];
