use crate::{atoms::Atoms, effect::Effect, keyboard::KeyboardMapping};
use log::{error, warn};
use xcb::{
    x::{self, ButtonIndex, EventMask, ModMask, Window},
    Connection, VoidCookieChecked, Xid,
};

pub struct X11 {
    conn: Connection,
    root: Window,
    atoms: Atoms,
    wm_check_window: Window,
}

impl X11 {
    pub fn connect() -> Result<Self, Box<dyn std::error::Error>> {
        let (conn, screen_num) = Connection::connect(None)?;
        let root = conn
            .get_setup()
            .roots()
            .nth(screen_num as usize)
            .ok_or("Cannot find root")?
            .root();
        let atoms = Atoms::initialize(&conn)?;
        let wm_check_window = Self::create_wm_check_window(&conn, root);

        Ok(Self {
            conn,
            root,
            atoms,
            wm_check_window,
        })
    }

    fn create_wm_check_window(conn: &Connection, root: Window) -> Window {
        // Clients read _NET_SUPPORTING_WM_CHECK from this window to identify the WM
        let win = conn.generate_id();
        conn.send_request(&x::CreateWindow {
            depth: 0,
            wid: win,
            parent: root,
            x: -1,
            y: -1,
            width: 1,
            height: 1,
            border_width: 0,
            class: x::WindowClass::InputOnly,
            visual: 0,
            value_list: &[x::Cw::OverrideRedirect(true)],
        });
        win
    }

    pub const fn root(&self) -> Window {
        self.root
    }

    pub const fn wm_check_window(&self) -> Window {
        self.wm_check_window
    }

    pub const fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    pub fn wait_for_event(&self) -> xcb::Result<xcb::Event> {
        self.conn.wait_for_event()
    }

    pub fn fetch_keyboard_mapping(&self) -> KeyboardMapping {
        let setup = self.conn.get_setup();
        let min_keycode = setup.min_keycode();
        let cookie = self.conn.send_request(&x::GetKeyboardMapping {
            first_keycode: min_keycode,
            count: setup.max_keycode() - min_keycode + 1,
        });

        match self.conn.wait_for_reply(cookie) {
            Ok(reply) => KeyboardMapping {
                min_keycode,
                keysyms_per_keycode: reply.keysyms_per_keycode() as usize,
                keysyms: reply.keysyms().to_vec(),
            },
            Err(e) => {
                warn!("Failed to get keyboard mapping, using empty keysyms: {e:?}");
                KeyboardMapping {
                    min_keycode,
                    keysyms_per_keycode: 0,
                    keysyms: vec![],
                }
            }
        }
    }

    pub fn apply_effects_checked(&self, effects: &[Effect]) {
        let mut pending_checks: Vec<(VoidCookieChecked, String)> = Vec::new();

        for effect in effects {
            let effect_dbg = format!("{effect:?}");
            pending_checks.push((self.send_effect_checked(effect), effect_dbg));
        }

        if let Err(e) = self.flush() {
            error!("Failed to flush X connection: {e:?}");
        }

        for (cookie, effect_dbg) in pending_checks {
            if let Err(e) = self.check_cookie(cookie) {
                error!("X error applying {effect_dbg}: {e:?}");
            }
        }
    }

    pub fn send_effect_checked(&self, effect: &Effect) -> VoidCookieChecked {
        match effect {
            Effect::SetCardinal32 {
                window,
                atom,
                value,
            } => self.change_property_checked(*window, *atom, x::ATOM_CARDINAL, &[*value]),
            Effect::SetAtomList {
                window,
                atom,
                values,
            } => self.change_property_checked(*window, *atom, x::ATOM_ATOM, values),
            Effect::SetUtf8String {
                window,
                atom,
                value,
            } => self.change_property_checked(
                *window,
                *atom,
                self.atoms.utf8_string,
                value.as_bytes(),
            ),
            Effect::SetWindowProperty {
                window,
                atom,
                values,
            } => self.change_property_checked(*window, *atom, x::ATOM_WINDOW, values),
            Effect::GrabKey {
                keycode,
                modifiers,
                grab_window,
            } => self.grab_key_checked(*keycode, *modifiers, *grab_window),
            Effect::GrabButton {
                button,
                modifiers,
                grab_window,
            } => self.grab_button_checked(*button, *modifiers, *grab_window),
        }
    }

    fn change_property_checked<P: x::PropEl>(
        &self,
        window: Window,
        atom: x::Atom,
        r#type: x::Atom,
        data: &[P],
    ) -> VoidCookieChecked {
        self.conn.send_request_checked(&x::ChangeProperty {
            mode: x::PropMode::Replace,
            window,
            property: atom,
            r#type,
            data,
        })
    }

    fn grab_key_checked(
        &self,
        keycode: u8,
        modifiers: ModMask,
        grab_window: Window,
    ) -> VoidCookieChecked {
        self.conn.send_request_checked(&x::GrabKey {
            owner_events: false,
            grab_window,
            modifiers,
            key: keycode,
            pointer_mode: x::GrabMode::Async,
            keyboard_mode: x::GrabMode::Async,
        })
    }

    fn grab_button_checked(
        &self,
        button: ButtonIndex,
        modifiers: ModMask,
        grab_window: Window,
    ) -> VoidCookieChecked {
        self.conn.send_request_checked(&x::GrabButton {
            owner_events: false,
            grab_window,
            event_mask: EventMask::BUTTON_PRESS
                | EventMask::BUTTON_RELEASE
                | EventMask::POINTER_MOTION,
            pointer_mode: x::GrabMode::Async,
            keyboard_mode: x::GrabMode::Async,
            confine_to: Window::none(),
            cursor: x::Cursor::none(),
            button,
            modifiers,
        })
    }

    pub fn flush(&self) -> xcb::Result<()> {
        self.conn.flush().map_err(Into::into)
    }

    pub fn check_cookie(&self, cookie: VoidCookieChecked) -> xcb::Result<()> {
        self.conn.check_request(cookie).map_err(Into::into)
    }
}
