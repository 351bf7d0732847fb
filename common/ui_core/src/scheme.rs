#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Checked toggle means dark.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        Self::from_checked(prefers_dark)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown color scheme: {0:?}")]
pub struct SchemeParseError(pub String);

impl FromStr for Scheme {
    type Err = SchemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SchemeParseError(other.to_owned())),
        }
    }
}

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq};

    #[test]
    fn names_parse_back() {
        for scheme in [Scheme::Light, Scheme::Dark] {
            assert_ok_eq!(scheme.as_str().parse::<Scheme>(), scheme);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_err!("pastel".parse::<Scheme>());
        assert_err!("Dark".parse::<Scheme>());
        assert_err!("".parse::<Scheme>());
    }

    #[test]
    fn checked_toggle_is_dark() {
        assert_eq!(Scheme::from_checked(true), Scheme::Dark);
        assert_eq!(Scheme::from_checked(false), Scheme::Light);
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Scheme::default(), Scheme::Light);
        assert_eq!(Scheme::default().to_string(), "light");
    }
}
