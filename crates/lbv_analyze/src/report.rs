//! Plain-text report model.

use std::fmt;

const RULE_WIDTH: usize = 80;

/// Report title printed in the banner.
pub const REPORT_TITLE: &str = "LINE BUFFER CONTROLLER SIMULATION ANALYSIS";

/// One numbered report section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Section number, stable whether or not earlier sections were omitted.
    pub number: u8,
    /// Upper-case section title.
    pub title: String,
    /// Body lines, already indented.
    pub lines: Vec<String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(number: u8, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a body line.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

/// A rendered analysis: a title and its sections in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Banner title.
    pub title: String,
    /// Sections in print order.
    pub sections: Vec<Section>,
}

impl Report {
    /// Creates a report with no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Looks up a section by number.
    pub fn section(&self, number: u8) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(RULE_WIDTH);
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{banner}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{banner}")?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}. {}", section.number, section.title)?;
            writeln!(f, "{rule}")?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        writeln!(f, "{banner}")
    }
}
