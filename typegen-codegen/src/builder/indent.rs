//! Indentation units.

/// One level of indentation in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Java and C# convention.
    pub const FOUR: Self = Self("    ");

    /// TypeScript convention.
    pub const TWO: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whitespace for `depth` levels.
    pub fn repeat(&self, depth: usize) -> String {
        self.0.repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::TWO.repeat(2), "    ");
        assert_eq!(Indent::FOUR.repeat(0), "");
        assert_eq!(Indent::default().as_str(), "    ");
    }
}
