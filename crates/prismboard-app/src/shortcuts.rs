//! Keyboard shortcut registry and documentation.

use prismboard_core::tools::ToolKind;

/// A keyboard shortcut that switches the active tool.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub tool: ToolKind,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        tool: ToolKind,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            tool,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Whether a key press with these modifiers triggers the shortcut.
    /// Letter keys match case-insensitively.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.ctrl == ctrl && self.shift == shift && self.key.eq_ignore_ascii_case(key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("R", false, false, ToolKind::Rectangle, "Rectangle tool"),
            Shortcut::new("C", false, false, ToolKind::Circle, "Circle tool"),
        ]
    }

    /// Tool selected by a key press, if any.
    pub fn tool_for_key(key: &str, ctrl: bool, shift: bool) -> Option<ToolKind> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, ctrl, shift))
            .map(|s| s.tool)
    }

    /// Display string of the shortcut selecting `tool`.
    pub fn label_for(tool: ToolKind) -> Option<String> {
        Self::all()
            .into_iter()
            .find(|s| s.tool == tool)
            .map(|s| s.format())
    }

    /// Log all shortcuts at info level.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {:8} {}", shortcut.format(), shortcut.description);
        }
    }
}
