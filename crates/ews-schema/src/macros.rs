/// Implements [`crate::cores::SimpleType`] for a primitive number type.
#[macro_export]
macro_rules! xml_num_value {
    ($type:ty, $kind:literal) => {
        impl $crate::cores::SimpleType for $type {
            fn to_xml_text(
                &self,
            ) -> Result<::std::borrow::Cow<'_, str>, $crate::error::ValueError> {
                Ok(::std::borrow::Cow::Owned(self.to_string()))
            }

            fn from_xml_text(text: &str) -> Result<Self, $crate::error::ValueError> {
                text.trim()
                    .parse::<$type>()
                    .map_err(|_| $crate::error::ValueError::new($kind, text))
            }
        }
    };
}

/// Declares an XSD string enumeration as a Rust enum.
///
/// ```ignore
/// simple_enum! {
///     /// Documentation for the enum.
///     pub enum OofState: "t:OofState" {
///         Disabled => "Disabled",
///         Enabled => "Enabled",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// The schema token of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValueError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match text.trim() {
                    $($token => Ok(Self::$variant),)+
                    _ => Err($crate::error::ValueError::new($kind, text)),
                }
            }
        }

        impl $crate::cores::SimpleType for $name {
            fn to_xml_text(
                &self,
            ) -> Result<::std::borrow::Cow<'_, str>, $crate::error::ValueError> {
                Ok(::std::borrow::Cow::Borrowed(self.as_str()))
            }

            fn from_xml_text(text: &str) -> Result<Self, $crate::error::ValueError> {
                text.parse()
            }
        }
    };
}
