//! Declarative record definitions.

/// Declare a record type and its schema in one place.
///
/// Each field is written `name: Type`, optionally followed by `=> "key"` to
/// bind it to a tree key other than the Rust field name. Field order is
/// schema order. The macro emits the struct itself, a `Default` impl and
/// the [`Record`](crate::Record) and [`Field`](crate::Field) impls, so the
/// record can be nested inside other records.
///
/// ```rust
/// use recordtree_record::{record, Nullable, Record, RecordExt};
///
/// record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///         pub label: Nullable<String> => "name",
///     }
/// }
///
/// assert_eq!(Point::FIELD_NAMES, &["x", "y", "name"]);
///
/// let p = Point::from_json(r#"{"x": 1, "y": 2, "name": null}"#).unwrap();
/// assert_eq!(p.x, 1);
/// assert!(p.label.is_null());
/// ```
#[macro_export]
macro_rules! record {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $key:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: ::core::default::Default::default(), )*
                }
            }
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            const FIELD_NAMES: &'static [&'static str] = &[
                $( $crate::record!(@key $field $($key)?) ),*
            ];

            fn schema() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::FieldDescriptor::new(
                            $crate::record!(@key $field $($key)?),
                            <$ty as $crate::Field>::shape(),
                        ),
                    )*
                ]
            }

            #[allow(unused_mut, unused_variables)]
            fn validate_record(
                node: &$crate::Value,
            ) -> ::core::result::Result<(), $crate::FieldFailure> {
                let mut reader = $crate::FieldReader::new(node)?;
                $( reader.validate::<$ty>($crate::record!(@key $field $($key)?))?; )*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_mut, unused_variables)]
            fn decode_record(
                node: &$crate::Value,
            ) -> ::core::result::Result<Self, $crate::FieldFailure> {
                let mut reader = $crate::FieldReader::new(node)?;
                ::core::result::Result::Ok(Self {
                    $( $field: reader.decode::<$ty>($crate::record!(@key $field $($key)?))?, )*
                })
            }

            #[allow(unused_mut)]
            fn create_record(
                &self,
            ) -> ::core::result::Result<$crate::Value, $crate::FieldFailure> {
                let mut writer = $crate::FieldWriter::new();
                $( writer.encode($crate::record!(@key $field $($key)?), &self.$field)?; )*
                ::core::result::Result::Ok(writer.finish())
            }
        }

        impl $crate::Field for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::Record(stringify!($name))
            }

            fn validate(node: &$crate::Value) -> ::core::result::Result<(), $crate::Diagnostic> {
                <Self as $crate::Record>::validate_record(node)
                    .map_err($crate::FieldFailure::into_diagnostic)
            }

            fn decode(node: &$crate::Value) -> ::core::result::Result<Self, $crate::Diagnostic> {
                <Self as $crate::Record>::decode_record(node)
                    .map_err($crate::FieldFailure::into_diagnostic)
            }

            fn encode(&self) -> ::core::result::Result<$crate::Value, $crate::Diagnostic> {
                <Self as $crate::Record>::create_record(self)
                    .map_err($crate::FieldFailure::into_diagnostic)
            }
        }
    };
}
