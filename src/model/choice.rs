//! Closed value sets (statuses, roles, kinds) shared by the entity modules.

/// Declare a closed set of wire values with `Display`, `FromStr` and an `ALL`
/// table for pickers. Parsing is case-insensitive.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant,)+
        }
        impl $name {
            /// Every accepted value, in presentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
            /// Wire representation.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
        impl std::str::FromStr for $name {
            type Err = $crate::model::ValidationError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::model::validation::parse_choice($field, s, $name::ALL, $name::as_str)
            }
        }
    };
}
