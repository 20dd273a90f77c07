use log::{info, warn};
use std::collections::HashMap;
use xcb::x::{self, ModMask};

use crate::bindings::BindingTable;
use crate::effect::Effect;
use crate::key_mapping::Action;
use crate::mouse::MouseBinding;

/// Snapshot of the server's keycode → keysyms table.
pub struct KeyboardMapping {
    pub min_keycode: u8,
    pub keysyms_per_keycode: usize,
    pub keysyms: Vec<u32>,
}

impl KeyboardMapping {
    pub fn keycode_for(&self, keysym: u32) -> Option<u8> {
        if self.keysyms_per_keycode == 0 {
            return None;
        }
        self.keysyms
            .chunks(self.keysyms_per_keycode)
            .position(|chunk| chunk.contains(&keysym))
            .and_then(|i| u8::try_from(i).ok())
            .and_then(|i| self.min_keycode.checked_add(i))
    }
}

/// Maps the last-match view of `table` onto physical keycodes. Keys the
/// keyboard can't produce are skipped.
pub fn resolve_key_bindings(
    table: &BindingTable,
    mapping: &KeyboardMapping,
) -> HashMap<(u8, ModMask), Action> {
    let mut key_bindings = HashMap::new();

    for binding in table.resolved().values() {
        match mapping.keycode_for(binding.key.raw()) {
            Some(keycode) => {
                key_bindings.insert((keycode, binding.modifiers), binding.action);
                info!(
                    "Mapped key {} (keycode: {}) to action: {:?}",
                    binding.chord_name(),
                    keycode,
                    binding.action
                );
            }
            None => warn!(
                "No keycode produces {}, skipping {:?}",
                binding.chord_name(),
                binding.action
            ),
        }
    }

    key_bindings
}

/// CapsLock (`LOCK`) and NumLock (`N2`) don't take part in binding lookup.
fn lock_mask() -> ModMask {
    ModMask::LOCK | ModMask::N2
}

fn lock_variants(modifiers: ModMask) -> [ModMask; 4] {
    [
        modifiers,
        modifiers | ModMask::LOCK,
        modifiers | ModMask::N2,
        modifiers | lock_mask(),
    ]
}

/// Strips the lock modifiers from a key event state.
pub fn clean_mask(state: ModMask) -> ModMask {
    ModMask::from_bits_truncate(state.bits() & !lock_mask().bits())
}

/// Grabs every binding under each combination of the lock modifiers, so
/// bindings still fire with CapsLock or NumLock on.
pub fn grab_effects(
    key_bindings: &HashMap<(u8, ModMask), Action>,
    mouse: &[MouseBinding],
    root: x::Window,
) -> Vec<Effect> {
    let keys = key_bindings.keys().flat_map(|&(keycode, modifiers)| {
        lock_variants(modifiers)
            .into_iter()
            .map(move |modifiers| Effect::GrabKey {
                keycode,
                modifiers,
                grab_window: root,
            })
    });
    let buttons = mouse.iter().flat_map(|binding| {
        let (modifiers, button) = binding.chord();
        lock_variants(modifiers)
            .into_iter()
            .map(move |modifiers| Effect::GrabButton {
                button,
                modifiers,
                grab_window: root,
            })
    });
    keys.chain(buttons).collect()
}
