/// Declares a section configuration record together with its overrides
/// record and the shallow [`Merge`](crate::models::Merge) between them.
///
/// ```ignore
/// section_config! {
///     pub struct BannerConfig / BannerOverrides {
///         title: String = "Hello".into(),
///     }
/// }
/// ```
#[macro_export]
macro_rules! section_config {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $overrides:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        #[doc = concat!("Partial overrides for [`", stringify!($name), "`]. Unset fields keep their defaults.")]
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $overrides {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: ::core::option::Option<$ty>,
            )*
        }

        impl $crate::models::Merge for $name {
            type Overrides = $overrides;

            fn merge(mut self, overrides: Self::Overrides) -> Self {
                $(
                    if let ::core::option::Option::Some(value) = overrides.$field {
                        self.$field = value;
                    }
                )*
                self
            }
        }
    };
}
