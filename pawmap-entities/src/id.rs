use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identifier '{input}': {source}")]
pub struct IdParseError {
    input: String,
    #[source]
    source: ParseIntError,
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(from: u64) -> Self {
                Self(from)
            }
        }

        impl From<$name> for u64 {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|source| IdParseError {
                        input: s.to_owned(),
                        source,
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a place on the map.
    PlaceId
);

numeric_id!(
    /// Identifier of a single review.
    ReviewId
);

numeric_id!(
    /// Identifier of a user (the author of reviews and owner of bookmarks).
    UserId
);
