//! Rewrites pull request descriptions between developer jargon and what it
//! actually means.
//!
//! Rules are applied one after another: every rule sees the text produced by
//! the rules before it, not the original description.

pub mod cli;
pub mod error;
pub mod mode;
pub mod rules;

pub use error::TranslateError;
pub use mode::Mode;
pub use rules::Rule;

/// Runs `text` through each rule in order and returns the final text.
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let mut result = text.to_string();
    for rule in rules {
        if rule.is_match(&result) {
            log::trace!("rule {} matched", rule.pattern());
            result = rule.apply(&result);
        }
    }
    result
}

/// Translates a description and prepends the heading for `mode`.
///
/// `Mode::Normal` turns jargon into human phrasing, `Mode::Tech` goes the
/// other way. The two directions are not inverses of each other.
pub fn translate(description: &str, mode: Mode) -> String {
    log::debug!("translating {} bytes in {} mode", description.len(), mode);

    let body = apply_rules(description, rules::for_mode(mode));

    let mut output = String::with_capacity(mode.prefix().len() + body.len());
    output.push_str(mode.prefix());
    output.push_str(&body);
    output
}

/// Like [`translate`], but takes the mode as it arrives from the command line.
pub fn translate_str(description: &str, mode: &str) -> Result<String, TranslateError> {
    let mode: Mode = mode.parse()?;
    Ok(translate(description, mode))
}
