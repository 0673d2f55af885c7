//! Display text carried by content and written to the memo.

/// Placeholder replaced with the player's name when text is narrated.
pub const PRINT_NAME_TOKEN: &str = "[PRINT_NAME]";

/// Placeholder used by content written for the name prompt.
pub const ASK_NAME_TOKEN: &str = "[ASK_NAME]";

/// Multi-line block of display text.
///
/// The core never formats text; it only carries lines from content to the
/// presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlock {
    pub lines: Vec<String>,
}

impl TextBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Returns a copy with `heading` inserted as the first line.
    pub fn with_heading(&self, heading: impl Into<String>) -> Self {
        let mut lines = Vec::with_capacity(self.lines.len() + 1);
        lines.push(heading.into());
        lines.extend(self.lines.iter().cloned());
        Self { lines }
    }

    /// Replaces name placeholders with `player_name`.
    pub fn personalize(&self, player_name: &str) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                line.replace(PRINT_NAME_TOKEN, player_name)
                    .replace(ASK_NAME_TOKEN, player_name)
            })
            .collect();
        Self { lines }
    }
}

impl From<&str> for TextBlock {
    fn from(text: &str) -> Self {
        Self::new(text.lines().map(str::to_owned).collect())
    }
}

impl From<String> for TextBlock {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl std::fmt::Display for TextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personalize_replaces_both_placeholders() {
        let text = TextBlock::from("Hello [PRINT_NAME].\nWho are you, [ASK_NAME]?");
        let named = text.personalize("Ada");
        assert_eq!(named.lines, vec!["Hello Ada.", "Who are you, Ada?"]);
    }

    #[test]
    fn heading_is_prepended() {
        let text = TextBlock::line("A bloody knife.");
        assert_eq!(
            text.with_heading("Knife :").lines,
            vec!["Knife :", "A bloody knife."]
        );
    }

    #[test]
    fn blank_lines_are_empty() {
        assert!(TextBlock::from("  \n").is_empty());
        assert!(!TextBlock::line("x").is_empty());
    }
}
