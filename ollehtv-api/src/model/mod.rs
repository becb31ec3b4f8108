//! Static vocabulary of the OTP API and the decoded state snapshot

/// Declare a closed enumeration with an exhaustive mapping to its wire code
///
/// Generates `code()`, `ALL`, `From<Enum> for $repr` and a `TryFrom<$repr>`
/// that rejects unknown codes with [`ApiError::UnknownCode`](crate::ApiError).
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire-level integer encoding
            pub fn code(self) -> $repr {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.code()
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = crate::ApiError;

            fn try_from(code: $repr) -> ::core::result::Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(crate::ApiError::UnknownCode {
                        kind: $kind,
                        code: i64::from(other),
                    }),
                }
            }
        }
    };
}

mod button;
mod device_state;
mod genre;
mod listing_date;
mod stb_state;

pub use button::{Button, KeyCode};
pub use device_state::{DeviceState, UNKNOWN_CHANNEL};
pub use genre::Genre;
pub use listing_date::{ListingDate, CURRENT_DATE};
pub use stb_state::StbState;

pub(crate) use device_state::int_field;
