//! Flash message values
//!
//! A flash value is either a single [`Scalar`] or an ordered list of scalars.
//! Lists are produced by [`FlashStore::add`](crate::FlashStore::add), which
//! promotes an existing scalar into a list before appending.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single flash payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
}

impl Scalar {
	/// Convert a JSON value into a scalar
	///
	/// Arrays and objects are not scalars and yield `None`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::Scalar;
	/// use serde_json::json;
	///
	/// assert_eq!(Scalar::from_json(&json!("saved")), Some(Scalar::Text("saved".into())));
	/// assert_eq!(Scalar::from_json(&json!(3)), Some(Scalar::Int(3)));
	/// assert_eq!(Scalar::from_json(&json!({"a": 1})), None);
	/// ```
	pub fn from_json(value: &Value) -> Option<Self> {
		match value {
			Value::Null => Some(Scalar::Null),
			Value::Bool(b) => Some(Scalar::Bool(*b)),
			Value::Number(n) => n
				.as_i64()
				.map(Scalar::Int)
				.or_else(|| n.as_f64().map(Scalar::Float)),
			Value::String(s) => Some(Scalar::Text(s.clone())),
			Value::Array(_) | Value::Object(_) => None,
		}
	}

	/// Convert the scalar into its JSON form
	///
	/// Non-finite floats become `null`, as JSON cannot carry them.
	pub fn to_json(&self) -> Value {
		match self {
			Scalar::Null => Value::Null,
			Scalar::Bool(b) => Value::Bool(*b),
			Scalar::Int(i) => Value::from(*i),
			Scalar::Float(f) => Value::from(*f),
			Scalar::Text(s) => Value::String(s.clone()),
		}
	}

	/// Text content, if this is a text scalar
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Scalar::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Boolean content, if this is a boolean scalar
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Scalar::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Integer content, if this is an integer scalar
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Scalar::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Scalar::Null)
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Scalar::Null => Ok(()),
			Scalar::Bool(b) => write!(f, "{}", b),
			Scalar::Int(i) => write!(f, "{}", i),
			Scalar::Float(x) => write!(f, "{}", x),
			Scalar::Text(s) => f.write_str(s),
		}
	}
}

/// Value stored under a flash key
///
/// # Examples
///
/// ```
/// use reinhardt_flash::{FlashValue, Scalar};
///
/// let value = FlashValue::from("first").appended("second");
/// assert!(value.is_list());
/// assert_eq!(value.len(), 2);
///
/// let texts: Vec<_> = value.iter().filter_map(Scalar::as_str).collect();
/// assert_eq!(texts, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlashValue {
	Scalar(Scalar),
	List(Vec<Scalar>),
}

impl FlashValue {
	/// Convert a JSON value into a flash value
	///
	/// Returns `None` for objects and for arrays holding non-scalar items.
	pub fn from_json(value: &Value) -> Option<Self> {
		match value {
			Value::Array(items) => items
				.iter()
				.map(Scalar::from_json)
				.collect::<Option<Vec<_>>>()
				.map(FlashValue::List),
			other => Scalar::from_json(other).map(FlashValue::Scalar),
		}
	}

	/// Convert the value into its JSON form
	pub fn to_json(&self) -> Value {
		match self {
			FlashValue::Scalar(s) => s.to_json(),
			FlashValue::List(items) => Value::Array(items.iter().map(Scalar::to_json).collect()),
		}
	}

	pub fn is_list(&self) -> bool {
		matches!(self, FlashValue::List(_))
	}

	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			FlashValue::Scalar(s) => Some(s),
			FlashValue::List(_) => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Scalar]> {
		match self {
			FlashValue::Scalar(_) => None,
			FlashValue::List(items) => Some(items),
		}
	}

	/// Text content of a scalar text value
	pub fn as_str(&self) -> Option<&str> {
		self.as_scalar().and_then(Scalar::as_str)
	}

	/// Number of scalars carried; a scalar counts as one
	pub fn len(&self) -> usize {
		match self {
			FlashValue::Scalar(_) => 1,
			FlashValue::List(items) => items.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterate over the carried scalars
	///
	/// A scalar value yields itself once, so view code can render both
	/// shapes with the same loop.
	pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
		match self {
			FlashValue::Scalar(s) => std::slice::from_ref(s).iter(),
			FlashValue::List(items) => items.iter(),
		}
	}

	/// Append a scalar, promoting a scalar value to a list first
	pub fn appended(self, value: impl Into<Scalar>) -> Self {
		let mut items = self.into_vec();
		items.push(value.into());
		FlashValue::List(items)
	}

	/// Consume the value into its scalars
	pub fn into_vec(self) -> Vec<Scalar> {
		match self {
			FlashValue::Scalar(s) => vec![s],
			FlashValue::List(items) => items,
		}
	}
}

/// The default flash value is `true`, a bare "something happened" marker
impl Default for FlashValue {
	fn default() -> Self {
		FlashValue::Scalar(Scalar::Bool(true))
	}
}

impl fmt::Display for FlashValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FlashValue::Scalar(s) => s.fmt(f),
			FlashValue::List(items) => {
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					item.fmt(f)?;
				}
				Ok(())
			}
		}
	}
}

impl<'a> IntoIterator for &'a FlashValue {
	type Item = &'a Scalar;
	type IntoIter = std::slice::Iter<'a, Scalar>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

macro_rules! impl_scalar_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Scalar {
				fn from(value: $ty) -> Self {
					Scalar::$variant(value.into())
				}
			}

			impl From<$ty> for FlashValue {
				fn from(value: $ty) -> Self {
					FlashValue::Scalar(Scalar::from(value))
				}
			}
		)*
	};
}

impl_scalar_from! {
	bool => Bool,
	i32 => Int,
	u32 => Int,
	i64 => Int,
	f64 => Float,
	String => Text,
	&str => Text,
}

impl From<()> for Scalar {
	fn from(_: ()) -> Self {
		Scalar::Null
	}
}

impl From<Scalar> for FlashValue {
	fn from(value: Scalar) -> Self {
		FlashValue::Scalar(value)
	}
}

impl<T: Into<Scalar>> From<Vec<T>> for FlashValue {
	fn from(values: Vec<T>) -> Self {
		FlashValue::List(values.into_iter().map(Into::into).collect())
	}
}
