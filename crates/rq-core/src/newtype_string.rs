//! Macro for the identifier newtypes used in column catalogs.
//!
//! Table qualifiers and column names share one invariant (never empty) and
//! the same trait surface, so both are generated from a single definition.

/// Define a non-empty identifier newtype over `String`.
///
/// Generates the struct plus `try_new()`, `new()`, `as_str()`, string
/// comparisons, `Display`, `Deref<Target = str>`, `Borrow<str>` and serde
/// impls. Deserialization rejects the empty string.
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// Build an identifier, returning `None` for the empty string.
            pub fn try_new(name: impl Into<String>) -> Option<Self> {
                let name = name.into();
                (!name.is_empty()).then_some(Self(name))
            }

            /// Build an identifier from a name known to be non-empty.
            ///
            /// # Panics
            ///
            /// Panics if `name` is empty. Use [`try_new`](Self::try_new) for
            /// input that has not been validated.
            pub fn new(name: impl Into<String>) -> Self {
                Self::try_new(name)
                    .unwrap_or_else(|| panic!(concat!(stringify!($Name), " must not be empty")))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                $Name::try_new(raw).ok_or_else(|| {
                    serde::de::Error::custom(concat!(stringify!($Name), " must not be empty"))
                })
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<$Name> for String {
            fn from(name: $Name) -> String {
                name.0
            }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

pub(crate) use define_identifier;
