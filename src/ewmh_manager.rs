use xcb::{x, Xid};

use crate::{atoms::Atoms, effect::Effect, wm_config::WmConfig};

pub struct EwmhManager<'a> {
    atoms: &'a Atoms,
    root: x::Window,
    check: x::Window,
}

impl<'a> EwmhManager<'a> {
    pub const fn new(atoms: &'a Atoms, root: x::Window, check: x::Window) -> Self {
        Self { atoms, root, check }
    }

    pub fn publish_hints(&self, config: &WmConfig) -> Vec<Effect> {
        let atoms = self.atoms;

        let supported_atoms = [
            atoms.supported,
            atoms.supporting_wm_check,
            atoms.number_of_desktops,
            atoms.current_desktop,
            atoms.desktop_names,
            atoms.wm_name,
        ];

        let mut desktop_names = String::new();
        for group in &config.groups {
            desktop_names.push(group.name);
            desktop_names.push('\0');
        }

        vec![
            Effect::SetWindowProperty {
                window: self.root,
                atom: atoms.supporting_wm_check,
                values: vec![self.check.resource_id()],
            },
            Effect::SetWindowProperty {
                window: self.check,
                atom: atoms.supporting_wm_check,
                values: vec![self.check.resource_id()],
            },
            Effect::SetUtf8String {
                window: self.check,
                atom: atoms.wm_name,
                value: config.behavior.wmname.to_string(),
            },
            Effect::SetAtomList {
                window: self.root,
                atom: atoms.supported,
                values: supported_atoms
                    .iter()
                    .map(xcb::Xid::resource_id)
                    .collect::<Vec<_>>(),
            },
            Effect::SetCardinal32 {
                window: self.root,
                atom: atoms.number_of_desktops,
                value: config.groups.len() as u32,
            },
            Effect::SetCardinal32 {
                window: self.root,
                atom: atoms.current_desktop,
                value: 0,
            },
            Effect::SetUtf8String {
                window: self.root,
                atom: atoms.desktop_names,
                value: desktop_names,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use xcb::XidNew;

    use super::*;

    fn atoms() -> Atoms {
        unsafe {
            Atoms {
                supported: x::Atom::new(1),
                supporting_wm_check: x::Atom::new(2),
                number_of_desktops: x::Atom::new(3),
                current_desktop: x::Atom::new(4),
                desktop_names: x::Atom::new(5),
                wm_name: x::Atom::new(6),
                utf8_string: x::Atom::new(7),
            }
        }
    }

    #[test]
    fn test_publish_hints() {
        let atoms = atoms();
        let (root, check) = unsafe { (x::Window::new(100), x::Window::new(200)) };
        let config = WmConfig::build().unwrap();
        let effects = EwmhManager::new(&atoms, root, check).publish_hints(&config);

        assert!(effects.contains(&Effect::SetWindowProperty {
            window: root,
            atom: atoms.supporting_wm_check,
            values: vec![200],
        }));
        assert!(effects.contains(&Effect::SetUtf8String {
            window: check,
            atom: atoms.wm_name,
            value: "LG3D".to_string(),
        }));
        assert!(effects.contains(&Effect::SetCardinal32 {
            window: root,
            atom: atoms.number_of_desktops,
            value: 9,
        }));
        assert!(effects.contains(&Effect::SetUtf8String {
            window: root,
            atom: atoms.desktop_names,
            value: "1\u{0}2\u{0}3\u{0}4\u{0}5\u{0}6\u{0}7\u{0}8\u{0}9\u{0}".to_string(),
        }));
    }
}
