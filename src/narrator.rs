//! Output sinks for walkthrough narration

use std::cell::RefCell;

/// Somewhere narration lines go
pub trait Narrator {
    fn say(&self, line: &str);
}

/// Prints each line to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Narrator for Stdout {
    fn say(&self, line: &str) {
        println!("{}", line);
    }
}

/// Records narration in memory
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Consume the transcript, returning its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner()
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Narrator for Transcript {
    fn say(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let t = Transcript::new();
        assert!(t.is_empty());

        t.say("first");
        t.say("second");

        assert_eq!(t.len(), 2);
        assert_eq!(t.lines(), vec!["first", "second"]);
        assert!(t.contains("sec"));
        assert!(!t.contains("third"));
        assert_eq!(t.into_lines(), vec!["first", "second"]);
    }
}
