use std::collections::HashMap;

use log::{debug, error, info};
use xcb::x::{self, ModMask};

use dracula::autostart::{spawn_command, ProcessSpawner, Spawner, StartupHook};
use dracula::ewmh_manager::EwmhManager;
use dracula::key_mapping::Action;
use dracula::keyboard;
use dracula::layout::LayoutCycle;
use dracula::wm_config::WmConfig;
use dracula::x11::X11;

fn main() {
    env_logger::init();

    let config = match WmConfig::build() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to build profile: {e}");
            std::process::exit(1);
        }
    };
    print!("{}", config.cheat_sheet());

    let x11 = match X11::connect() {
        Ok(x11) => x11,
        Err(e) => {
            error!("Failed to connect to X: {e:?}");
            std::process::exit(1);
        }
    };
    info!("Connected to X.");

    let key_bindings = install(&x11, &config);

    let spawner = ProcessSpawner;
    StartupHook::new().fire_from_env(&spawner);

    if let Err(e) = run(&x11, &config, &key_bindings, &spawner) {
        error!("Event loop error: {e:?}");
    }
}

fn install(x11: &X11, config: &WmConfig) -> HashMap<(u8, ModMask), Action> {
    let mapping = x11.fetch_keyboard_mapping();
    let key_bindings = keyboard::resolve_key_bindings(&config.keys, &mapping);

    let mut effects = keyboard::grab_effects(&key_bindings, &config.mouse, x11.root());
    effects.extend(
        EwmhManager::new(x11.atoms(), x11.root(), x11.wm_check_window()).publish_hints(config),
    );
    x11.apply_effects_checked(&effects);
    info!("Installed {} key bindings", key_bindings.len());

    key_bindings
}

fn run(
    x11: &X11,
    config: &WmConfig,
    key_bindings: &HashMap<(u8, ModMask), Action>,
    spawner: &dyn Spawner,
) -> xcb::Result<()> {
    let mut layouts = LayoutCycle::new(&config.layouts);

    loop {
        let ev = match x11.wait_for_event()? {
            xcb::Event::X(x::Event::KeyPress(ev)) => ev,
            ev => {
                debug!("Ignoring event: {ev:?}");
                continue;
            }
        };

        let modifiers = keyboard::clean_mask(ModMask::from_bits_truncate(ev.state().bits()));
        let Some(action) = key_bindings.get(&(ev.detail(), modifiers)) else {
            debug!(
                "No binding found for keycode: {} with modifiers: {:?}",
                ev.detail(),
                modifiers
            );
            continue;
        };

        match action {
            Action::Spawn(cmd) => spawn_command(spawner, cmd),
            Action::NextLayout => {
                if let Some(layout) = layouts.next() {
                    info!("Layout: {}", layout.name());
                }
            }
            Action::Shutdown => {
                info!("Shutting down");
                return Ok(());
            }
            other => info!("{other:?} is not handled by this binary"),
        }
    }
}
