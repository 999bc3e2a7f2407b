//! Strongly-typed identifier value objects.
//!
//! The legislature API keys every record with a database integer, so each
//! entity gets its own newtype to keep proposal ids from being passed where a
//! member id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw API identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifier of a legislative proposal.
    ProposalId
);
define_id!(
    /// Identifier of a political party.
    PartyId
);
define_id!(
    /// Identifier of a member of parliament.
    MemberId
);
define_id!(
    /// Identifier of a debate held on a proposal.
    DebateId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProposalId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn id_deserializes_from_integer() {
        let id: MemberId = serde_json::from_str("3").unwrap();
        assert_eq!(id, MemberId::new(3));
    }

    #[test]
    fn id_parses_from_trimmed_string() {
        assert_eq!(" 12 ".parse::<PartyId>().unwrap(), PartyId::new(12));
        assert!("twelve".parse::<PartyId>().is_err());
    }

    #[test]
    fn id_displays_raw_value() {
        assert_eq!(DebateId::new(42).to_string(), "42");
    }
}
