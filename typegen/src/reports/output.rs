//! Output trait for rendering reports.

/// Sink for command reports.
///
/// Reports call these semantic methods; the sink decides formatting.
pub trait Output {
    /// Heading of a list that follows.
    fn section(&mut self, name: &str);

    /// `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// Neutral list entry.
    fn list_item(&mut self, text: &str);

    /// Entry for something created, e.g. a generated type.
    fn added_item(&mut self, text: &str);

    fn newline(&mut self);
}

/// Data gathered by a command, rendered after the work is done.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain stdout rendering.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for testing reports.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
