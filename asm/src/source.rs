/// Normalized command stream. Built once from the raw source lines, then
/// scanned twice by the assembler; the cursor rewinds between passes while
/// the command list itself never changes.
pub struct Commands {
    commands: Vec<String>,
    cursor: usize,
}

impl Commands {
    /// Strips every whitespace character (internal whitespace is never
    /// significant), truncates at the first `//`, and keeps whatever is
    /// left when non-empty.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut commands = vec![];
        for line in lines {
            let stripped: String = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let code = match stripped.split_once("//") {
                Some((code, _)) => code,
                None => &stripped,
            };
            if !code.is_empty() {
                commands.push(code.to_string());
            }
        }
        Commands { commands, cursor: 0 }
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Returns the next command and moves the cursor past it. Must only be
    /// called while `has_more()` is true.
    pub fn advance(&mut self) -> &str {
        let command = &self.commands[self.cursor];
        self.cursor += 1;
        command
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}
