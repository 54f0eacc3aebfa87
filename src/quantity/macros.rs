/// Defines a telemetry reading in the given unit.
///
/// The reading keeps the portal's JSON number as is, so that `100` stays `100` and `1.5` stays `1.5`
/// in the exposition. Anything that is not a number deserializes into zero.
macro_rules! reading {
    ($name:ident, $unit:literal) => {
        #[must_use]
        #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::derive_more::Display, ::derive_more::From)]
        pub struct $name(pub ::serde_json::Number);

        impl $name {
            pub fn zero() -> Self {
                Self(::serde_json::Number::from(0))
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, formatter)?;
                write!(formatter, "{}", $unit)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::quantity::deserialize_lenient_number(deserializer).map(Self)
            }
        }
    };
}
