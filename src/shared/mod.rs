//! Shared helpers used across all domain modules.
//!
//! - [`wire_enum!`] declares string-backed wire enums with a single mapping
//!   table that drives parsing, display and serde.
//! - [`OwnerType`] classifies owner ids (`U-…`, `G-…`, `M-…`).
//! - [`serde_util`] holds the timestamp coercions used by wire types.

pub mod asset;
pub mod clock;
pub mod serde_util;

pub use asset::{neosdb_signature, neosdb_to_http};
pub use clock::{Clock, SystemClock};

use crate::error::SdkError;

// ─── Wire enums ──────────────────────────────────────────────────────────────

/// Error returned when a wire string matches no enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a string-backed enum whose wire names live in one table.
///
/// Generates `as_str`, `FromStr` (exact, case-sensitive), `Display`,
/// `Serialize` and `Deserialize` from the same `Variant => "wire"` list.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::shared::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err($crate::shared::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use wire_enum;

// ─── OwnerType ───────────────────────────────────────────────────────────────

/// Kind of entity an owner id refers to, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerType {
    User,
    Group,
    Machine,
    Invalid,
}

impl OwnerType {
    /// Classify an owner id by shape.
    pub fn of(owner_id: &str) -> Self {
        if owner_id.starts_with("U-") {
            OwnerType::User
        } else if owner_id.starts_with("G-") {
            OwnerType::Group
        } else if owner_id.starts_with("M-") {
            OwnerType::Machine
        } else {
            OwnerType::Invalid
        }
    }

    /// API path prefix for owners that have one (`users` / `groups`).
    pub fn path_prefix(&self) -> Option<&'static str> {
        match self {
            OwnerType::User => Some("users"),
            OwnerType::Group => Some("groups"),
            OwnerType::Machine | OwnerType::Invalid => None,
        }
    }
}

/// Resolve the `users` / `groups` path prefix for an owner id.
pub(crate) fn owner_path(owner_id: &str) -> Result<&'static str, SdkError> {
    OwnerType::of(owner_id)
        .path_prefix()
        .ok_or_else(|| SdkError::Validation(format!("invalid owner type for {}", owner_id)))
}
