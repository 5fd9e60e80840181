/// Defines a string-backed identifier enum with an open `Custom(String)` variant.
///
/// Each listed variant maps to one lowercase id used for serialization,
/// parsing and display. Unknown ids parse into `Custom`, which lets callers
/// register identifiers the enum does not know about.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $id:literal $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::parse(&s))
            }
        }

        impl $enum_name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $id,
                    )*
                    Self::Custom(id) => id,
                }
            }

            /// Parses an id (case-insensitive), falling back to `Custom`
            pub fn parse(id: &str) -> Self {
                Self::from_known(id).unwrap_or_else(|| Self::Custom(id.to_string()))
            }

            /// Parses an id only if it names a built-in variant
            pub fn from_known(id: &str) -> Option<Self> {
                match id.to_ascii_lowercase().as_str() {
                    $(
                        $id $(| $alias)* => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }
    };
}
