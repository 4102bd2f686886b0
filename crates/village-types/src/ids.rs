//! Type-safe identifier wrappers.
//!
//! Agents are identified by their zero-based position in the roster. The
//! position doubles as the fixed iteration order used by every phase of a
//! tick, so identifiers are plain indices rather than random UUIDs.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a `u32` index with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an identifier from a raw index.
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Return the inner index value.
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier for an agent, equal to its position in the roster.
    AgentId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_index() {
        assert!(AgentId::new(0) < AgentId::new(1));
        assert!(AgentId::new(9) > AgentId::new(2));
    }

    #[test]
    fn display_is_raw_index() {
        assert_eq!(AgentId::new(4).to_string(), "4");
    }

    #[test]
    fn serializes_transparently_as_number() {
        let json = serde_json::to_string(&AgentId::new(3)).unwrap_or_default();
        assert_eq!(json, "3");
    }
}
