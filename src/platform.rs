//! Platform-specific key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifiers accepted for the submit shortcut
/// - macOS: CONTROL or SUPER (Cmd key, when the terminal forwards it)
/// - Linux/Windows: CONTROL
#[cfg(target_os = "macos")]
const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether `key` is the form submit shortcut
pub fn is_submit_shortcut(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.intersects(SUBMIT_MODIFIERS)
}

/// Whether `key` is Ctrl+C
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
