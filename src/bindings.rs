use indexmap::IndexMap;
use log::{debug, warn};
use xcb::x::ModMask;
use xkbcommon::xkb;

use crate::error::{ConfigError, Result};
use crate::key_mapping::{Action, ActionMapping, Binding};
use crate::wm_config::Group;

/// Ordered key binding table. Every appended entry is kept; when two entries
/// share a chord the later one wins, see [`BindingTable::resolved`].
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    entries: Vec<Binding>,
    static_len: usize,
}

impl BindingTable {
    pub fn build(statics: &[ActionMapping], groups: &[Group], modifier: ModMask) -> Result<Self> {
        let mut entries: Vec<Binding> = statics.iter().map(Binding::from).collect();
        let static_len = entries.len();

        for group in groups {
            let key = group_keysym(group.name)?;
            entries.push(Binding {
                modifiers: modifier,
                key,
                action: Action::ToGroup(group.name),
                description: format!("Switch to group {}", group.name),
            });
            entries.push(Binding {
                modifiers: modifier | ModMask::SHIFT,
                key,
                action: Action::MoveToGroup {
                    group: group.name,
                    switch_group: false,
                },
                description: format!("Switch to & move focused window to group {}", group.name),
            });
        }

        let table = BindingTable {
            entries,
            static_len,
        };
        for (earlier, later) in table.shadowed() {
            warn!(
                "Binding {:?} ({}) is shadowed by {:?} ({})",
                table.entries[earlier].action,
                table.entries[earlier].chord_name(),
                table.entries[later].action,
                table.entries[later].chord_name(),
            );
        }
        debug!(
            "Built binding table: {} static, {} generated",
            table.static_len,
            table.entries.len() - table.static_len
        );

        Ok(table)
    }

    pub fn entries(&self) -> &[Binding] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn static_entries(&self) -> &[Binding] {
        &self.entries[..self.static_len]
    }

    pub fn generated_entries(&self) -> &[Binding] {
        &self.entries[self.static_len..]
    }

    /// Last-match view of the table, keyed by `(modifiers, raw keysym)`.
    /// A chord keeps the position of its first occurrence.
    pub fn resolved(&self) -> IndexMap<(ModMask, u32), &Binding> {
        let mut map = IndexMap::new();
        for binding in &self.entries {
            map.insert(binding.chord(), binding);
        }
        map
    }

    /// Pairs of `(shadowed, winner)` indices into [`BindingTable::entries`].
    pub fn shadowed(&self) -> Vec<(usize, usize)> {
        let mut last_seen: IndexMap<(ModMask, u32), usize> = IndexMap::new();
        let mut pairs = Vec::new();
        for (i, binding) in self.entries.iter().enumerate() {
            if let Some(prev) = last_seen.insert(binding.chord(), i) {
                pairs.push((prev, i));
            }
        }
        pairs
    }
}

const NO_SYMBOL: u32 = 0;

fn group_keysym(name: char) -> Result<xkb::Keysym> {
    let name = name.to_string();
    let keysym = xkb::keysym_from_name(&name, xkb::KEYSYM_NO_FLAGS);
    if keysym.raw() == NO_SYMBOL {
        return Err(ConfigError::UnknownKeysym(name));
    }
    Ok(keysym)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ACTION_MAPPINGS, MOD, WORKSPACE_NAMES};
    use crate::key_mapping::Direction;

    fn groups() -> Vec<Group> {
        WORKSPACE_NAMES.chars().map(Group::new).collect()
    }

    fn table() -> BindingTable {
        BindingTable::build(ACTION_MAPPINGS, &groups(), MOD).unwrap()
    }

    #[test]
    fn test_each_group_gets_one_switch_and_one_move() {
        let table = table();
        for group in groups() {
            let switches = table
                .entries()
                .iter()
                .filter(|b| b.action == Action::ToGroup(group.name))
                .count();
            let moves = table
                .entries()
                .iter()
                .filter(|b| {
                    b.action
                        == Action::MoveToGroup {
                            group: group.name,
                            switch_group: false,
                        }
                })
                .count();
            assert_eq!(switches, 1, "group {}", group.name);
            assert_eq!(moves, 1, "group {}", group.name);
        }
    }

    #[test]
    fn test_generated_entries_follow_group_order() {
        let table = table();
        assert_eq!(table.static_entries().len(), ACTION_MAPPINGS.len());
        assert_eq!(table.len(), ACTION_MAPPINGS.len() + 2 * WORKSPACE_NAMES.len());

        let generated = table.generated_entries();
        for (i, name) in WORKSPACE_NAMES.chars().enumerate() {
            let switch = &generated[2 * i];
            let move_to = &generated[2 * i + 1];
            assert_eq!(switch.action, Action::ToGroup(name));
            assert_eq!(switch.modifiers, MOD);
            assert_eq!(switch.description, format!("Switch to group {name}"));
            assert_eq!(
                move_to.action,
                Action::MoveToGroup {
                    group: name,
                    switch_group: false
                }
            );
            assert_eq!(move_to.modifiers, MOD | ModMask::SHIFT);
            assert_eq!(switch.key, move_to.key);
        }
    }

    #[test]
    fn test_group_keys_are_digit_keysyms() {
        let table = table();
        let first = &table.generated_entries()[0];
        assert_eq!(first.key.raw(), '1' as u32);
        assert_eq!(first.chord_name(), "mod4 1");
    }

    #[test]
    fn test_profile_has_no_shadowed_bindings() {
        let table = table();
        assert!(table.shadowed().is_empty());
        assert_eq!(table.resolved().len(), table.len());
    }

    #[test]
    fn test_generated_binding_wins_over_static_digit() {
        let digit = xkb::keysym_from_name("1", xkb::KEYSYM_NO_FLAGS);
        let statics = [
            ActionMapping {
                key: xkb::Keysym::h,
                modifiers: &[ModMask::N4],
                action: Action::Focus(Direction::Left),
                desc: "Move focus to left",
            },
            ActionMapping {
                key: digit,
                modifiers: &[ModMask::N4],
                action: Action::Spawn("st"),
                desc: "Launch st",
            },
        ];
        let table = BindingTable::build(&statics, &[Group::new('1')], ModMask::N4).unwrap();

        assert_eq!(table.shadowed(), vec![(1, 2)]);

        let resolved = table.resolved();
        assert_eq!(resolved.len(), 3);
        let winner = resolved[&(ModMask::N4, '1' as u32)];
        assert_eq!(winner.action, Action::ToGroup('1'));
        // first-seen position is kept
        assert_eq!(resolved.get_index_of(&(ModMask::N4, '1' as u32)), Some(1));
    }

    #[test]
    fn test_unknown_group_keysym() {
        let err = BindingTable::build(&[], &[Group::new('\u{1}')], ModMask::N4).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKeysym(_)));
    }
}
