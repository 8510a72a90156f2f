//! Strongly-typed ID wrappers for entities with surrogate identity
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. An ID of zero means "not yet assigned"; the
//! record store replaces it with the next counter value on insert.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate integer ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// The placeholder ID for records that have not been inserted yet
            pub const UNASSIGNED: Self = Self(0);

            /// Wrap a raw integer ID
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Get the raw integer value
            pub const fn get(&self) -> i32 {
                self.0
            }

            /// Whether this ID still needs to be assigned by the store
            pub const fn is_unassigned(&self) -> bool {
                self.0 == 0
            }

            /// The ID that follows this one, or `None` at `i32::MAX`
            pub(crate) fn next(&self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(CategoryId);
define_id!(TransactionId);
