//! Keyboard shortcuts.
//!
//! Keys are matched by their DOM `key` name ("ArrowLeft", "Escape", "h").

use crate::catalog::OFFSET_STEP;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Offset(i32),
    Altitude(i32),
    ToggleHotspot,
    OpenHelp,
    CloseHelp,
    /// Handled by doing nothing (default browser action still suppressed)
    Swallow,
}

/// Viewer conditions that change how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub hotspot: bool,
    pub help_open: bool,
    /// A blocking notice ended the session
    pub fatal: bool,
}

/// Map a key to a command; `None` leaves the event to the browser.
pub fn key_command(key: &str, ctx: KeyContext) -> Option<KeyCommand> {
    if ctx.fatal {
        return None;
    }
    if ctx.help_open {
        return match key {
            "Escape" => Some(KeyCommand::CloseHelp),
            _ => None,
        };
    }
    let step = OFFSET_STEP as i32;
    match key {
        "ArrowLeft" => Some(KeyCommand::Offset(-step)),
        "ArrowRight" => Some(KeyCommand::Offset(step)),
        "ArrowUp" | "ArrowDown" if ctx.hotspot => Some(KeyCommand::Swallow),
        "ArrowUp" => Some(KeyCommand::Altitude(1)),
        "ArrowDown" => Some(KeyCommand::Altitude(-1)),
        "h" | "H" => Some(KeyCommand::ToggleHotspot),
        "?" => Some(KeyCommand::OpenHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_navigate() {
        let ctx = KeyContext::default();
        assert_eq!(key_command("ArrowLeft", ctx), Some(KeyCommand::Offset(-3)));
        assert_eq!(key_command("ArrowRight", ctx), Some(KeyCommand::Offset(3)));
        assert_eq!(key_command("ArrowUp", ctx), Some(KeyCommand::Altitude(1)));
        assert_eq!(key_command("ArrowDown", ctx), Some(KeyCommand::Altitude(-1)));
        assert_eq!(key_command("H", ctx), Some(KeyCommand::ToggleHotspot));
        assert_eq!(key_command("x", ctx), None);
    }

    #[test]
    fn test_hotspot_swallows_vertical() {
        let ctx = KeyContext { hotspot: true, ..Default::default() };
        assert_eq!(key_command("ArrowUp", ctx), Some(KeyCommand::Swallow));
        assert_eq!(key_command("ArrowLeft", ctx), Some(KeyCommand::Offset(-3)));
    }

    #[test]
    fn test_help_open_blocks_navigation() {
        let ctx = KeyContext { help_open: true, ..Default::default() };
        assert_eq!(key_command("ArrowLeft", ctx), None);
        assert_eq!(key_command("ArrowUp", ctx), None);
        assert_eq!(key_command("h", ctx), None);
        assert_eq!(key_command("Escape", ctx), Some(KeyCommand::CloseHelp));
    }

    #[test]
    fn test_fatal_notice_ignores_keys() {
        let ctx = KeyContext { fatal: true, ..Default::default() };
        for key in ["ArrowLeft", "ArrowDown", "Escape", "h", "?"] {
            assert_eq!(key_command(key, ctx), None);
        }
    }
}
