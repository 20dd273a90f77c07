//! Dracula desktop profile for an X11 tiling window manager.

pub mod atoms;
pub mod autostart;
pub mod bindings;
pub mod config;
pub mod effect;
pub mod error;
pub mod ewmh_manager;
pub mod float_rules;
pub mod key_mapping;
pub mod keyboard;
pub mod layout;
pub mod mouse;
pub mod palette;
pub mod screen;
pub mod widget;
pub mod wm_config;
pub mod x11;
