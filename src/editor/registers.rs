/// Single-slot register holding the most recently yanked or deleted line.
///
/// An empty register is a valid state; pasting from it does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    content: Option<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { content: None }
    }

    pub fn get(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Replaces the stored line.
    pub fn set(&mut self, line: impl Into<String>) {
        self.content = Some(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_starts_empty() {
        let clipboard = Clipboard::new();
        assert!(clipboard.is_empty());
        assert_eq!(clipboard.get(), None);
    }

    #[test]
    fn test_clipboard_set_replaces() {
        let mut clipboard = Clipboard::new();
        clipboard.set("first");
        clipboard.set("second");
        assert_eq!(clipboard.get(), Some("second"));
    }

    #[test]
    fn test_empty_line_is_not_empty_clipboard() {
        let mut clipboard = Clipboard::new();
        clipboard.set("");
        assert!(!clipboard.is_empty());
        assert_eq!(clipboard.get(), Some(""));
    }
}
