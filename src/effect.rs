use xcb::x::{self, ButtonIndex, ModMask, Window};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetCardinal32 {
        window: Window,
        atom: x::Atom,
        value: u32,
    },
    SetAtomList {
        window: Window,
        atom: x::Atom,
        values: Vec<u32>,
    },
    SetUtf8String {
        window: Window,
        atom: x::Atom,
        value: String,
    },
    SetWindowProperty {
        window: Window,
        atom: x::Atom,
        values: Vec<u32>,
    },
    GrabKey {
        keycode: u8,
        modifiers: ModMask,
        grab_window: Window,
    },
    GrabButton {
        button: ButtonIndex,
        modifiers: ModMask,
        grab_window: Window,
    },
}
