//! Type-dispatched validation, decoding and encoding of single fields.
//!
//! Dispatch happens on the declared Rust type through the [`Field`] trait,
//! never on the runtime shape of the node. The trait is implemented for the
//! seven scalar types, `Nullable<T>`, `Vec<T>`, `[T; N]` and every type
//! declared with [`record!`](crate::record); a field of any other type is a
//! compile error.

use recordtree_value::Value;

use crate::{Diagnostic, Nullable, Shape};

/// A type that can sit in a record field.
pub trait Field: Sized {
    /// The declared shape, for schema descriptors.
    fn shape() -> Shape;

    /// Check that `node` has the shape this type requires.
    fn validate(node: &Value) -> Result<(), Diagnostic>;

    /// Read a value out of `node`.
    ///
    /// Meant to run after [`Field::validate`] succeeded; it still re-checks
    /// shapes and reports a diagnostic instead of assuming success.
    fn decode(node: &Value) -> Result<Self, Diagnostic>;

    /// Write this value into a new node.
    fn encode(&self) -> Result<Value, Diagnostic>;
}

macro_rules! scalar_field {
    ($ty:ty, $shape:ident, $is:ident, $as:ident) => {
        impl Field for $ty {
            fn shape() -> Shape {
                Shape::$shape
            }

            fn validate(node: &Value) -> Result<(), Diagnostic> {
                if node.$is() {
                    Ok(())
                } else {
                    Err(Diagnostic::invalid_value_type())
                }
            }

            fn decode(node: &Value) -> Result<Self, Diagnostic> {
                node.$as().ok_or_else(Diagnostic::invalid_value)
            }

            fn encode(&self) -> Result<Value, Diagnostic> {
                Ok(Value::from(*self))
            }
        }
    };
}

scalar_field!(bool, Bool, is_bool, as_bool);
scalar_field!(i32, I32, is_i32, as_i32);
scalar_field!(u32, U32, is_u32, as_u32);
scalar_field!(i64, I64, is_i64, as_i64);
scalar_field!(u64, U64, is_u64, as_u64);

impl Field for f64 {
    fn shape() -> Shape {
        Shape::F64
    }

    fn validate(node: &Value) -> Result<(), Diagnostic> {
        if node.is_f64() {
            Ok(())
        } else {
            Err(Diagnostic::invalid_value_type())
        }
    }

    fn decode(node: &Value) -> Result<Self, Diagnostic> {
        node.as_f64().ok_or_else(Diagnostic::invalid_value)
    }

    fn encode(&self) -> Result<Value, Diagnostic> {
        if self.is_finite() {
            Ok(Value::from(*self))
        } else {
            Err(Diagnostic::non_finite())
        }
    }
}

impl Field for String {
    fn shape() -> Shape {
        Shape::String
    }

    fn validate(node: &Value) -> Result<(), Diagnostic> {
        if node.is_string() {
            Ok(())
        } else {
            Err(Diagnostic::invalid_value_type())
        }
    }

    fn decode(node: &Value) -> Result<Self, Diagnostic> {
        node.as_str()
            .map(str::to_owned)
            .ok_or_else(Diagnostic::invalid_value)
    }

    fn encode(&self) -> Result<Value, Diagnostic> {
        Ok(Value::from(self.as_str()))
    }
}

impl<T: Field + Default> Field for Nullable<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }

    fn validate(node: &Value) -> Result<(), Diagnostic> {
        if node.is_null() {
            return Ok(());
        }
        T::validate(node)
    }

    fn decode(node: &Value) -> Result<Self, Diagnostic> {
        if node.is_null() {
            return Ok(Nullable::null());
        }
        T::decode(node).map(Nullable::new)
    }

    fn encode(&self) -> Result<Value, Diagnostic> {
        match self.value() {
            Some(v) => v.encode(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: Field> Field for Vec<T> {
    fn shape() -> Shape {
        Shape::List(Box::new(T::shape()))
    }

    fn validate(node: &Value) -> Result<(), Diagnostic> {
        let items = node.as_array().ok_or_else(Diagnostic::must_be_array)?;
        for (i, item) in items.iter().enumerate() {
            T::validate(item).map_err(|d| d.at_index(i))?;
        }
        Ok(())
    }

    fn decode(node: &Value) -> Result<Self, Diagnostic> {
        let items = node.as_array().ok_or_else(Diagnostic::must_be_array)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item).map_err(|d| d.at_index(i)))
            .collect()
    }

    fn encode(&self) -> Result<Value, Diagnostic> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.encode().map_err(|d| d.at_index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

fn fixed_items<const N: usize>(node: &Value) -> Result<&[Value], Diagnostic> {
    let items = node
        .as_array()
        .ok_or_else(|| Diagnostic::must_be_fixed_array(N))?;
    if items.len() != N {
        return Err(Diagnostic::fixed_array_size(items.len(), N));
    }
    Ok(items)
}

impl<T: Field, const N: usize> Field for [T; N] {
    fn shape() -> Shape {
        Shape::Array(Box::new(T::shape()), N)
    }

    fn validate(node: &Value) -> Result<(), Diagnostic> {
        let items = fixed_items::<N>(node)?;
        for (i, item) in items.iter().enumerate() {
            T::validate(item).map_err(|d| d.at_index(i))?;
        }
        Ok(())
    }

    fn decode(node: &Value) -> Result<Self, Diagnostic> {
        let items = fixed_items::<N>(node)?;
        let decoded = items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item).map_err(|d| d.at_index(i)))
            .collect::<Result<Vec<T>, _>>()?;
        decoded
            .try_into()
            .map_err(|v: Vec<T>| Diagnostic::fixed_array_size(v.len(), N))
    }

    fn encode(&self) -> Result<Value, Diagnostic> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.encode().map_err(|d| d.at_index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordtree_value::{json_to_value, Value};

    fn json(v: serde_json::Value) -> Value {
        json_to_value(v)
    }

    #[test]
    fn scalars_match_their_shapes() {
        assert!(bool::validate(&Value::Bool(true)).is_ok());
        assert!(i32::validate(&json(serde_json::json!(-5))).is_ok());
        assert!(u32::validate(&json(serde_json::json!(123))).is_ok());
        assert!(u64::validate(&json(serde_json::json!(u64::MAX))).is_ok());
        assert!(f64::validate(&json(serde_json::json!(1))).is_ok());
        assert!(String::validate(&Value::from("x")).is_ok());

        let err = u32::validate(&Value::from("123")).unwrap_err();
        assert_eq!(err.to_string(), " -> invalid value type.");
        assert!(i32::validate(&Value::Null).is_err());
        assert!(u32::validate(&Value::from(-1)).is_err());
        assert!(bool::validate(&Value::from(1)).is_err());
    }

    #[test]
    fn scalar_decode_and_encode() {
        assert_eq!(u32::decode(&Value::from(42)), Ok(42));
        assert_eq!(i64::decode(&Value::Float(7.0)), Ok(7));
        assert_eq!(String::decode(&Value::from("hi")), Ok("hi".to_string()));
        assert_eq!(u32::decode(&Value::from("42")), Err(Diagnostic::invalid_value()));

        assert_eq!(true.encode(), Ok(Value::Bool(true)));
        assert_eq!(u64::MAX.encode(), Ok(Value::Unsigned(u64::MAX)));
        assert_eq!(2.5f64.encode(), Ok(Value::Float(2.5)));
        assert_eq!(f64::NAN.encode(), Err(Diagnostic::non_finite()));
    }

    #[test]
    fn nullable_accepts_null_and_checks_inner_otherwise() {
        assert!(Nullable::<u32>::validate(&Value::Null).is_ok());
        assert!(Nullable::<u32>::validate(&Value::from(1)).is_ok());
        assert!(Nullable::<u32>::validate(&Value::from("1")).is_err());

        assert_eq!(Nullable::<u32>::decode(&Value::Null), Ok(Nullable::null()));
        assert_eq!(Nullable::<u32>::decode(&Value::from(9)), Ok(Nullable::new(9)));

        assert_eq!(Nullable::<u32>::null().encode(), Ok(Value::Null));
        assert_eq!(Nullable::new(3u32).encode(), Ok(Value::from(3)));
    }

    #[test]
    fn list_reports_first_failing_index() {
        let node = json(serde_json::json!([1, 2, "x", "y"]));
        let err = Vec::<i32>::validate(&node).unwrap_err();
        assert_eq!(err.to_string(), "[2] -> invalid value type.");

        let err = Vec::<i32>::validate(&Value::from(5)).unwrap_err();
        assert_eq!(err, Diagnostic::must_be_array());
    }

    #[test]
    fn list_accepts_empty_and_preserves_order() {
        assert_eq!(Vec::<i32>::decode(&Value::array()), Ok(vec![]));
        let node = json(serde_json::json!([3, 1, 2]));
        assert_eq!(Vec::<i32>::decode(&node), Ok(vec![3, 1, 2]));
        assert_eq!(vec![3i32, 1, 2].encode(), Ok(node));
    }

    #[test]
    fn fixed_array_checks_shape_then_length_then_elements() {
        let err = <[i32; 3]>::validate(&Value::from("x")).unwrap_err();
        assert_eq!(err.message(), "invalid type, must be fixed size (3) array.");

        let err = <[i32; 3]>::validate(&json(serde_json::json!([1, 2]))).unwrap_err();
        assert_eq!(err.message(), "invalid fixed size array 2 != 3.");

        let err = <[i32; 3]>::validate(&json(serde_json::json!([1, 2, 3, 4]))).unwrap_err();
        assert_eq!(err.message(), "invalid fixed size array 4 != 3.");

        let err = <[i32; 3]>::validate(&json(serde_json::json!([1, true, 3]))).unwrap_err();
        assert_eq!(err.to_string(), "[1] -> invalid value type.");

        let node = json(serde_json::json!([7, 6, 5]));
        assert!(<[i32; 3]>::validate(&node).is_ok());
        assert_eq!(<[i32; 3]>::decode(&node), Ok([7, 6, 5]));
        assert_eq!([7i32, 6, 5].encode(), Ok(node));
    }

    #[test]
    fn nested_wrappers_qualify_paths() {
        let node = json(serde_json::json!([[1], null, [2, "z"]]));
        let err = Vec::<Nullable<Vec<i32>>>::validate(&node).unwrap_err();
        assert_eq!(err.to_string(), "[2][1] -> invalid value type.");

        let node = json(serde_json::json!([[1], null]));
        let decoded = Vec::<Nullable<Vec<i32>>>::decode(&node).unwrap();
        assert_eq!(decoded, vec![Nullable::new(vec![1]), Nullable::null()]);
    }

    #[test]
    fn encode_failure_carries_index() {
        let err = vec![1.0, f64::INFINITY].encode().unwrap_err();
        assert_eq!(err.to_string(), "[1] -> invalid value, must be a finite number.");
    }

    #[test]
    fn shapes_describe_declared_types() {
        assert_eq!(<Nullable<[u64; 2]>>::shape().to_string(), "optional<array<u64, 2>>");
        assert_eq!(<Vec<String>>::shape().to_string(), "list<string>");
    }
}
