use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::mode::Mode;

/// A case-insensitive pattern and the literal text that replaces every match.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &'static str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Rule {
            pattern,
            replacement,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replaces all non-overlapping matches. `$` in the replacement is not expanded.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(self.replacement))
            .into_owned()
    }
}

const TECH_TO_NORMAL_TABLE: &[(&str, &str)] = &[
    (r"\bLGTM\b", "Looks good to me (probably didn't read it)"),
    (r"\bWIP\b", "Work in progress (aka: I'm committing crimes)"),
    (r"\brefactor\b", "I touched everything but nothing changed (trust me)"),
    (r"\boptimize\b", "Made it faster (or at least different)"),
    (r"\bfix\b", "Broke it yesterday, less broken today"),
    (r"\benhancement\b", "Added a button that does nothing"),
    (r"\btech debt\b", "My past self was an idiot"),
    (r"\bedge case\b", "Something that will break in production"),
    (r"\bscalability\b", "Works for our 3 users"),
    (r"\bsecurity\b", r#"Changed "password" to "p@ssw0rd""#),
    (r"\b\d+\s?ms\b", "Blazing fast (on my gaming PC)"),
    (r"\b\d+%\s+faster\b", "Probably measured wrong"),
    (r"\bNFR\b", "Non-functional requirement (aka: magic)"),
];

const NORMAL_TO_TECH_TABLE: &[(&str, &str)] = &[
    (r"\bbug\b", "Unexpected feature"),
    (r"\bworks\b", "Passes one test case"),
    (r"\bquick fix\b", "Technical debt delivery"),
    (r"\bsimple\b", "Only 47 files changed"),
    (r"\beasy\b", "Will take 3 weeks"),
    (r"\buser friendly\b", "Added 14 configuration options"),
    (r"\bintuitive\b", "Documentation required"),
    (r"\brobust\b", "Handles one error case"),
];

fn compile(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| {
            // constant patterns, a failure here is a typo in the table
            Rule::new(pattern, replacement).expect("invalid built-in rule pattern")
        })
        .collect()
}

/// Jargon to human phrasing, in application order.
pub static TECH_TO_NORMAL: Lazy<Vec<Rule>> = Lazy::new(|| compile(TECH_TO_NORMAL_TABLE));

/// Human phrasing to jargon, in application order.
pub static NORMAL_TO_TECH: Lazy<Vec<Rule>> = Lazy::new(|| compile(NORMAL_TO_TECH_TABLE));

pub fn for_mode(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Normal => &TECH_TO_NORMAL,
        Mode::Tech => &NORMAL_TO_TECH,
    }
}
