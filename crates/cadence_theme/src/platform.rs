//! Best-effort OS signal detection
//!
//! Each platform query is allowed to fail; any failure collapses to `None`
//! and the watcher falls back to its fixed defaults. No platform call here
//! may panic or block for long.

use crate::system::{SignalSource, SystemSignal};
use crate::theme::ColorScheme;

/// [`SignalSource`] backed by the host OS.
pub struct PlatformSource;

impl SignalSource for PlatformSource {
    fn query(&self) -> Option<SystemSignal> {
        detect_system_signal()
    }
}

/// Query the OS dark-mode and reduced-motion settings, if the platform
/// exposes them.
pub fn detect_system_signal() -> Option<SystemSignal> {
    imp::detect()
}

#[cfg(target_os = "linux")]
mod imp {
    use super::*;
    use std::process::Command;

    fn gsetting(schema: &str, key: &str) -> Option<String> {
        let output = Command::new("gsettings")
            .args(["get", schema, key])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }

    pub fn detect() -> Option<SystemSignal> {
        let scheme = gsetting("org.gnome.desktop.interface", "color-scheme")?;
        let color_scheme = if scheme.contains("prefer-dark") {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        // Missing animation setting just means no reduced-motion request.
        let reduced_motion = gsetting("org.gnome.desktop.interface", "enable-animations")
            .map(|value| value.contains("false"))
            .unwrap_or(false);
        Some(SystemSignal {
            color_scheme,
            reduced_motion,
        })
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use super::*;
    use std::process::Command;

    pub fn detect() -> Option<SystemSignal> {
        // AppleInterfaceStyle is only present when dark mode is on; the
        // command failing means light mode, not "unsupported".
        let dark = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout).contains("Dark")
            })
            .unwrap_or(false);
        let reduced_motion = Command::new("defaults")
            .args(["read", "com.apple.universalaccess", "reduceMotion"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout).trim() == "1"
            })
            .unwrap_or(false);
        Some(SystemSignal {
            color_scheme: if dark {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            },
            reduced_motion,
        })
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod imp {
    use super::*;

    pub fn detect() -> Option<SystemSignal> {
        None
    }
}
