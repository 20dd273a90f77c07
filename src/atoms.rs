use xcb::x;
use xcb::Connection;

pub struct Atoms {
    pub supported: x::Atom,
    pub supporting_wm_check: x::Atom,
    pub number_of_desktops: x::Atom,
    pub current_desktop: x::Atom,
    pub desktop_names: x::Atom,
    pub wm_name: x::Atom,
    pub utf8_string: x::Atom,
}

impl Atoms {
    pub fn initialize(conn: &Connection) -> xcb::Result<Self> {
        Ok(Self {
            supported: Self::intern_atom(conn, "_NET_SUPPORTED")?,
            supporting_wm_check: Self::intern_atom(conn, "_NET_SUPPORTING_WM_CHECK")?,
            number_of_desktops: Self::intern_atom(conn, "_NET_NUMBER_OF_DESKTOPS")?,
            current_desktop: Self::intern_atom(conn, "_NET_CURRENT_DESKTOP")?,
            desktop_names: Self::intern_atom(conn, "_NET_DESKTOP_NAMES")?,
            wm_name: Self::intern_atom(conn, "_NET_WM_NAME")?,
            utf8_string: Self::intern_atom(conn, "UTF8_STRING")?,
        })
    }

    fn intern_atom(conn: &Connection, name: &str) -> xcb::Result<x::Atom> {
        let cookie = conn.send_request(&x::InternAtom {
            only_if_exists: false,
            name: name.as_bytes(),
        });
        Ok(conn.wait_for_reply(cookie)?.atom())
    }
}
