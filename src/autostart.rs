use log::{error, info, warn};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Once;
use std::thread::{self, JoinHandle};

use crate::config::APP_NAME;
use crate::error::{ConfigError, Result};

/// Launches processes without waiting on them. The child's exit status and
/// output are never observed.
pub trait Spawner {
    fn spawn_detached(&self, program: &OsStr, args: &[&str]);
}

pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn_detached(&self, program: &OsStr, args: &[&str]) {
        info!("Spawning command: {} {:?}", program.to_string_lossy(), args);
        match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                info!("Successfully spawned {:?} (pid {})", program, child.id());
                reap(child);
            }
            Err(e) => error!("Failed to spawn {:?}: {:?}", program, e),
        }
    }
}

/// Collects the child's exit status in the background so it doesn't linger
/// as a zombie. The status itself is discarded.
pub fn reap(mut child: Child) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = child.wait();
    })
}

/// Splits a launcher command line such as `rofi -show run` into program and
/// arguments and spawns it.
pub fn spawn_command(spawner: &dyn Spawner, cmdline: &str) {
    let mut parts = cmdline.split_whitespace();
    let Some(program) = parts.next() else {
        warn!("Ignoring empty command");
        return;
    };
    let args: Vec<&str> = parts.collect();
    spawner.spawn_detached(OsStr::new(program), &args);
}

pub fn home_dir() -> Result<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or(ConfigError::HomeNotSet)
}

pub fn autostart_path(home: &Path) -> PathBuf {
    home.join(".config").join(APP_NAME).join("autostart.sh")
}

/// Runs the user's autostart script once per window manager start.
pub struct StartupHook {
    once: Once,
}

impl Default for StartupHook {
    fn default() -> Self {
        Self { once: Once::new() }
    }
}

impl StartupHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self, home: &Path, spawner: &dyn Spawner) {
        self.once.call_once(|| {
            let script = autostart_path(home);
            info!("Running autostart script {}", script.display());
            spawner.spawn_detached(script.as_os_str(), &[]);
        });
    }

    pub fn fire_from_env(&self, spawner: &dyn Spawner) {
        match home_dir() {
            Ok(home) => self.fire(&home, spawner),
            Err(e) => error!("Skipping autostart: {e}"),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.once.is_completed()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsString;

    #[derive(Default)]
    pub(crate) struct RecordingSpawner {
        pub calls: RefCell<Vec<(OsString, Vec<String>)>>,
    }

    impl Spawner for RecordingSpawner {
        fn spawn_detached(&self, program: &OsStr, args: &[&str]) {
            self.calls.borrow_mut().push((
                program.to_os_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
        }
    }

    #[test]
    fn test_autostart_path() {
        assert_eq!(
            autostart_path(Path::new("/home/u")),
            PathBuf::from(format!("/home/u/.config/{APP_NAME}/autostart.sh"))
        );
    }

    #[test]
    fn test_startup_hook_spawns_script_without_arguments() {
        let spawner = RecordingSpawner::default();
        let hook = StartupHook::new();
        assert!(!hook.has_fired());

        hook.fire(Path::new("/home/u"), &spawner);

        let calls = spawner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].0,
            OsString::from(format!("/home/u/.config/{APP_NAME}/autostart.sh"))
        );
        assert!(calls[0].1.is_empty());
        assert!(hook.has_fired());
    }

    #[test]
    fn test_startup_hook_fires_once() {
        let spawner = RecordingSpawner::default();
        let hook = StartupHook::new();
        hook.fire(Path::new("/home/u"), &spawner);
        hook.fire(Path::new("/home/other"), &spawner);
        assert_eq!(spawner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_spawn_command_splits_arguments() {
        let spawner = RecordingSpawner::default();
        spawn_command(&spawner, "rofi -show run");
        spawn_command(&spawner, "firefox");
        spawn_command(&spawner, "   ");

        let calls = spawner.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, OsString::from("rofi"));
        assert_eq!(calls[0].1, vec!["-show".to_string(), "run".to_string()]);
        assert_eq!(calls[1].0, OsString::from("firefox"));
        assert!(calls[1].1.is_empty());
    }

    #[test]
    fn test_reap_collects_exited_child() {
        let child = Command::new("true").spawn().unwrap();
        let pid = child.id();
        reap(child).join().unwrap();
        assert!(!Path::new(&format!("/proc/{pid}")).exists());
    }

    #[test]
    fn test_missing_home_skips_autostart() {
        let saved = env::var_os("HOME");

        env::remove_var("HOME");
        assert_eq!(home_dir(), Err(ConfigError::HomeNotSet));
        let spawner = RecordingSpawner::default();
        let hook = StartupHook::new();
        hook.fire_from_env(&spawner);
        assert!(spawner.calls.borrow().is_empty());
        assert!(!hook.has_fired());

        env::set_var("HOME", "");
        assert_eq!(home_dir(), Err(ConfigError::HomeNotSet));
        hook.fire_from_env(&spawner);
        assert!(spawner.calls.borrow().is_empty());
        assert!(!hook.has_fired());

        env::set_var("HOME", "/home/u");
        assert_eq!(home_dir(), Ok(PathBuf::from("/home/u")));
        hook.fire_from_env(&spawner);
        assert_eq!(spawner.calls.borrow().len(), 1);
        assert!(hook.has_fired());

        match saved {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
    }

    #[test]
    fn test_missing_script_does_not_panic() {
        let hook = StartupHook::new();
        hook.fire(Path::new("/nonexistent-home"), &ProcessSpawner);
        assert!(hook.has_fired());
    }
}
