use core::fmt;
use serde::{Deserialize, Serialize};

/// What the host reveals about one seat's guess for the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guess {
    /// The seat sits this round out.
    NotPlaying,
    /// The seat is playing but has not called a total (yet).
    #[default]
    Pending,
    /// A called total.
    Called(u32),
}

impl Guess {
    pub const fn is_playing(self) -> bool {
        !matches!(self, Guess::NotPlaying)
    }

    pub const fn called(self) -> Option<u32> {
        match self {
            Guess::Called(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guess::NotPlaying => f.write_str("not playing"),
            Guess::Pending => f.write_str("pending"),
            Guess::Called(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Guess;

    #[test]
    fn only_called_guesses_carry_a_value() {
        assert_eq!(Guess::Called(0).called(), Some(0));
        assert_eq!(Guess::Pending.called(), None);
        assert_eq!(Guess::NotPlaying.called(), None);
    }

    #[test]
    fn pending_counts_as_playing() {
        assert!(Guess::Pending.is_playing());
        assert!(Guess::Called(4).is_playing());
        assert!(!Guess::NotPlaying.is_playing());
    }

    #[test]
    fn serializes_as_tagged_value() {
        let json = serde_json::to_string(&Guess::Called(7)).unwrap();
        assert_eq!(json, r#"{"called":7}"#);
        let json = serde_json::to_string(&Guess::NotPlaying).unwrap();
        assert_eq!(json, r#""not_playing""#);
    }
}
