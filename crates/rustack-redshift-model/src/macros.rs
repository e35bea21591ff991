//! Shape declaration macro.

/// Declare a Redshift shape: the struct, its serde mapping, and its awsQuery
/// field table.
///
/// Every member is optional. The wire name doubles as the JSON key, so
/// members like `DBName` keep their exact spelling in both encodings.
macro_rules! redshift_shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $( ( $style:ident ) )? $wire:literal $( @ $path:literal )? => $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        ::rustack_query::query_shape!($name {
            $( $kind $( ( $style ) )? $wire $( @ $path )? => $field ),*
        });
    };
}
