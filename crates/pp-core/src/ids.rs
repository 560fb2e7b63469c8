//! Strongly typed string identifiers.
//!
//! Orders and facilities are identified by caller-supplied strings.  Wrapping
//! them keeps an order id from being passed where a facility id is expected.

use std::fmt;

/// Prefix for identifiers of newly placed facilities.
pub const NEW_FACILITY_PREFIX: &str = "PP_NEW_";

/// Generate a typed wrapper around an owned `String`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a historical order.
    pub struct OrderId;
}

string_id! {
    /// Identifier (`dp_id`) of a pickup point, existing or newly placed.
    pub struct FacilityId;
}

impl FacilityId {
    /// Identifier for the `ordinal`-th new facility (1-indexed): `PP_NEW_<n>`.
    pub fn new_facility(ordinal: usize) -> Self {
        Self(format!("{NEW_FACILITY_PREFIX}{ordinal}"))
    }

    /// `true` if this id was generated by [`new_facility`](Self::new_facility).
    pub fn is_new_facility(&self) -> bool {
        self.0.starts_with(NEW_FACILITY_PREFIX)
    }
}
