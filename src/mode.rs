use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

/// Direction of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Technical jargon to plain (sarcastic) human phrasing.
    #[default]
    Normal,
    /// Plain human phrasing to inflated technical phrasing.
    Tech,
}

impl Mode {
    pub fn prefix(self) -> &'static str {
        match self {
            Mode::Normal => "For normal humans:\n\n",
            Mode::Tech => "For technical reviewers:\n\n",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Tech => "tech",
        }
    }
}

impl FromStr for Mode {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Mode::Normal),
            "tech" => Ok(Mode::Tech),
            _ => Err(TranslateError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_modes() {
        assert_eq!("normal".parse::<Mode>(), Ok(Mode::Normal));
        assert_eq!("tech".parse::<Mode>(), Ok(Mode::Tech));
    }

    #[test]
    fn rejects_unknown_and_miscased_modes() {
        assert_eq!(
            "human".parse::<Mode>(),
            Err(TranslateError::InvalidMode("human".to_string()))
        );
        assert!("Normal".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [Mode::Normal, Mode::Tech] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn prefixes() {
        assert_eq!(Mode::Normal.prefix(), "For normal humans:\n\n");
        assert_eq!(Mode::Tech.prefix(), "For technical reviewers:\n\n");
    }
}
