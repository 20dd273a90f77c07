use xcb::x::{ButtonIndex, ModMask};

/// Window attribute read when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    Position,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    MoveFloating,
    ResizeFloating,
    BringToFront,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseBinding {
    Drag {
        modifiers: ModMask,
        button: ButtonIndex,
        action: MouseAction,
        start: DragStart,
    },
    Click {
        modifiers: ModMask,
        button: ButtonIndex,
        action: MouseAction,
    },
}

impl MouseBinding {
    pub fn chord(&self) -> (ModMask, ButtonIndex) {
        match *self {
            MouseBinding::Drag {
                modifiers, button, ..
            }
            | MouseBinding::Click {
                modifiers, button, ..
            } => (modifiers, button),
        }
    }

    pub fn is_drag(&self) -> bool {
        matches!(self, MouseBinding::Drag { .. })
    }
}

pub fn build_mouse_bindings(modifier: ModMask) -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            modifiers: modifier,
            button: ButtonIndex::N1,
            action: MouseAction::MoveFloating,
            start: DragStart::Position,
        },
        MouseBinding::Drag {
            modifiers: modifier,
            button: ButtonIndex::N3,
            action: MouseAction::ResizeFloating,
            start: DragStart::Size,
        },
        MouseBinding::Click {
            modifiers: modifier,
            button: ButtonIndex::N2,
            action: MouseAction::BringToFront,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_bindings() {
        let bindings = build_mouse_bindings(ModMask::N4);
        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings[0].chord(), (ModMask::N4, ButtonIndex::N1));
        assert!(bindings[0].is_drag());
        assert!(bindings[1].is_drag());
        assert!(!bindings[2].is_drag());
        assert_eq!(
            bindings[1],
            MouseBinding::Drag {
                modifiers: ModMask::N4,
                button: ButtonIndex::N3,
                action: MouseAction::ResizeFloating,
                start: DragStart::Size,
            }
        );
    }
}
