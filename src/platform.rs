//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Cmd combinations rarely reach terminal apps on macOS, so Ctrl everywhere.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
/// - macOS: "^C"
/// - Linux/Windows: "Ctrl+C"
#[cfg(target_os = "macos")]
pub const QUIT_SHORTCUT: &str = "^C";

#[cfg(not(target_os = "macos"))]
pub const QUIT_SHORTCUT: &str = "Ctrl+C";
