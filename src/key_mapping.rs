use xcb::x::ModMask;
use xkbcommon::xkb::{self, Keysym};

pub struct ActionMapping {
    pub key: Keysym,
    pub modifiers: &'static [ModMask],
    pub action: Action,
    pub desc: &'static str,
}

impl ActionMapping {
    pub fn modifier_mask(&self) -> ModMask {
        self.modifiers
            .iter()
            .copied()
            .reduce(|acc, modkey| acc | modkey)
            .unwrap_or(ModMask::empty())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Focus(Direction),
    FocusNext,
    Shuffle(Direction),
    Grow(Direction),
    Normalize,
    ToggleSplit,
    Spawn(&'static str),
    SpawnPrompt,
    NextLayout,
    Kill,
    Restart,
    Shutdown,
    ToGroup(char),
    MoveToGroup { group: char, switch_group: bool },
}

/// One row of the binding table.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub modifiers: ModMask,
    pub key: Keysym,
    pub action: Action,
    pub description: String,
}

impl Binding {
    pub fn chord(&self) -> (ModMask, u32) {
        (self.modifiers, self.key.raw())
    }

    /// Human readable chord, e.g. `mod4+shift h`.
    pub fn chord_name(&self) -> String {
        let mods = modifier_names(self.modifiers).join("+");
        let key = xkb::keysym_get_name(self.key);
        if mods.is_empty() {
            key
        } else {
            format!("{mods} {key}")
        }
    }
}

impl From<&ActionMapping> for Binding {
    fn from(mapping: &ActionMapping) -> Self {
        Binding {
            modifiers: mapping.modifier_mask(),
            key: mapping.key,
            action: mapping.action,
            description: mapping.desc.to_string(),
        }
    }
}

const MODIFIER_NAMES: &[(ModMask, &str)] = &[
    (ModMask::N4, "mod4"),
    (ModMask::N1, "mod1"),
    (ModMask::SHIFT, "shift"),
    (ModMask::CONTROL, "control"),
];

pub fn modifier_names(mask: ModMask) -> Vec<&'static str> {
    MODIFIER_NAMES
        .iter()
        .filter(|(modkey, _)| mask.bits() & modkey.bits() != 0)
        .map(|(_, name)| *name)
        .collect()
}
