//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for wizard shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Continue / Submit shortcut display for the wizard help text
/// Ctrl+S works on all platforms
pub const CONTINUE_SHORTCUT: &str = "Ctrl+S";

/// Previous step shortcut display
/// - macOS: "Cmd+B"
/// - Linux/Windows: "Ctrl+B"
#[cfg(target_os = "macos")]
pub const BACK_SHORTCUT: &str = "Cmd+B";

#[cfg(not(target_os = "macos"))]
pub const BACK_SHORTCUT: &str = "Ctrl+B";

/// Ctrl is accepted everywhere, plus the platform modifier
pub fn is_action_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(ACTION_MODIFIER)
}
