//! Header flags (`===+`, `===!`, `===+!`, `===!+`).

use std::fmt;
use std::str::FromStr;

/// The flag characters written between `===` and the title.
///
/// Each character may appear at most once and their order is kept:
/// `+!` and `!+` are different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flags {
    /// `+`
    Plus,
    /// `!`
    Bang,
    /// `+!`
    PlusBang,
    /// `!+`
    BangPlus,
}

impl Flags {
    /// Flags made of one character.
    pub fn first(c: char) -> Option<Self> {
        match c {
            '+' => Some(Flags::Plus),
            '!' => Some(Flags::Bang),
            _ => None,
        }
    }

    /// Flags extended by one more character, if that is still valid.
    pub fn then(self, c: char) -> Option<Self> {
        match (self, c) {
            (Flags::Plus, '!') => Some(Flags::PlusBang),
            (Flags::Bang, '+') => Some(Flags::BangPlus),
            _ => None,
        }
    }

    /// The flag characters, verbatim.
    pub fn as_str(self) -> &'static str {
        match self {
            Flags::Plus => "+",
            Flags::Bang => "!",
            Flags::PlusBang => "+!",
            Flags::BangPlus => "!+",
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a valid flag combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFlags(pub String);

impl fmt::Display for InvalidFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tab flags {:?}", self.0)
    }
}

impl std::error::Error for InvalidFlags {}

impl FromStr for Flags {
    type Err = InvalidFlags;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().and_then(Flags::first);
        chars
            .try_fold(first, |flags, c| flags.map(|f| f.then(c)))
            .flatten()
            .ok_or_else(|| InvalidFlags(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("+", Flags::Plus)]
    #[case("!", Flags::Bang)]
    #[case("+!", Flags::PlusBang)]
    #[case("!+", Flags::BangPlus)]
    fn valid_flags_keep_their_order(#[case] text: &str, #[case] flags: Flags) {
        assert_eq!(text.parse::<Flags>(), Ok(flags));
        assert_eq!(flags.as_str(), text);
    }

    #[rstest]
    #[case("")]
    #[case("++")]
    #[case("!!")]
    #[case("+!+")]
    #[case("!+!")]
    #[case("x")]
    fn invalid_flags_are_rejected(#[case] text: &str) {
        assert_eq!(text.parse::<Flags>(), Err(InvalidFlags(text.to_string())));
    }
}
