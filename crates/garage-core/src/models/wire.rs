//! Closed string enumerations as they appear on the wire

/// Declare a closed enumeration whose values are exact wire strings.
///
/// Each variant is derived with `#[serde(rename = $wire)]`, so serde rejects
/// any string outside the set with its `unknown variant` error. The macro adds
/// an `ALL` list in declaration order, `as_str`, `from_wire` and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every known value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire strings accepted for this enumeration
            pub const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            /// The literal wire string for this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Look up a value by its exact wire string
            pub fn from_wire(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
