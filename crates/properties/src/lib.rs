//! Property metadata
//!
//! Properties are the named attributes a document node exposes for editing.
//! This crate provides:
//! - Type definitions ([`PropertyDef`], [`PropertyValue`], [`PropertyType`], [`PropertyAccess`])
//! - Typed handles ([`PropertyKey`])
//! - Registration macro ([`property!`])
//! - Distributed slice ([`PROPERTIES`])
//! - Builtin properties for scene nodes and grid constraints ([`keys`])

mod impls;
mod macros;

#[doc(hidden)]
pub use linkme as __linkme;
use linkme::distributed_slice;
#[doc(hidden)]
pub use paste as __paste;

/// Typed handles for builtin properties.
///
/// ```ignore
/// use trellis_properties::keys;
///
/// let def = keys::min_width.def();
/// println!("{} defaults to {:?}", def.name, (def.default)());
/// ```
pub mod keys {
	pub use crate::impls::constraints::*;
	pub use crate::impls::node::*;
}

/// The value of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value (sizes, percentages, opacity).
	Float(f64),
	/// String value.
	String(String),
	/// Explicitly cleared value.
	Null,
}

impl PropertyValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			PropertyValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			PropertyValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			PropertyValue::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropertyValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true if this value can be stored in a property of the given type.
	///
	/// `Null` is accepted by every type.
	pub fn matches_type(&self, ty: PropertyType) -> bool {
		matches!(
			(self, ty),
			(PropertyValue::Null, _)
				| (PropertyValue::Bool(_), PropertyType::Bool)
				| (PropertyValue::Int(_), PropertyType::Int)
				| (PropertyValue::Float(_), PropertyType::Float)
				| (PropertyValue::String(_), PropertyType::String)
		)
	}

	/// Returns true if both values are the same for change detection.
	///
	/// Floats compare by bit pattern, so `NaN` is the same as itself.
	pub fn is_same(&self, other: &PropertyValue) -> bool {
		match (self, other) {
			(PropertyValue::Float(a), PropertyValue::Float(b)) => a.to_bits() == b.to_bits(),
			_ => self == other,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			PropertyValue::Bool(_) => "bool",
			PropertyValue::Int(_) => "int",
			PropertyValue::Float(_) => "float",
			PropertyValue::String(_) => "string",
			PropertyValue::Null => "null",
		}
	}
}

impl core::fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			PropertyValue::Bool(v) => write!(f, "{v}"),
			PropertyValue::Int(v) => write!(f, "{v}"),
			PropertyValue::Float(v) => write!(f, "{v}"),
			PropertyValue::String(v) => write!(f, "{v:?}"),
			PropertyValue::Null => f.write_str("null"),
		}
	}
}

impl From<bool> for PropertyValue {
	fn from(v: bool) -> Self {
		PropertyValue::Bool(v)
	}
}

impl From<i64> for PropertyValue {
	fn from(v: i64) -> Self {
		PropertyValue::Int(v)
	}
}

impl From<f64> for PropertyValue {
	fn from(v: f64) -> Self {
		PropertyValue::Float(v)
	}
}

impl From<String> for PropertyValue {
	fn from(v: String) -> Self {
		PropertyValue::String(v)
	}
}

impl From<&str> for PropertyValue {
	fn from(v: &str) -> Self {
		PropertyValue::String(v.to_string())
	}
}

/// The type of a property's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// Floating point type.
	Float,
	/// String type.
	String,
}

/// Whether a property may be written through the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccess {
	/// Property can be read and written.
	ReadWrite,
	/// Property is computed by the document and can only be read.
	ReadOnly,
}

/// Definition of an editable property.
pub struct PropertyDef {
	/// Unique identifier (e.g., "trellis-properties::min_width").
	pub id: &'static str,
	/// Display name as it appears in the document (e.g., "minWidth").
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Value type constraint.
	pub value_type: PropertyType,
	/// Default value factory.
	pub default: fn() -> PropertyValue,
	/// Read/write access.
	pub access: PropertyAccess,
}

impl core::fmt::Debug for PropertyDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PropertyDef")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("value_type", &self.value_type)
			.field("access", &self.access)
			.finish()
	}
}

/// Typed handle to a property definition.
///
/// Two keys are equal when they refer to the same definition `id`.
#[derive(Clone, Copy)]
pub struct PropertyKey(&'static PropertyDef);

impl PropertyKey {
	/// Wraps a static definition.
	pub const fn new(def: &'static PropertyDef) -> Self {
		Self(def)
	}

	/// Returns the underlying definition.
	pub fn def(&self) -> &'static PropertyDef {
		self.0
	}

	/// Returns the unique identifier.
	pub fn id(&self) -> &'static str {
		self.0.id
	}

	/// Returns the display name.
	pub fn name(&self) -> &'static str {
		self.0.name
	}

	/// Returns a fresh copy of the default value.
	pub fn default_value(&self) -> PropertyValue {
		(self.0.default)()
	}

	/// Returns `true` if the property can be written.
	pub fn is_read_write(&self) -> bool {
		self.0.access == PropertyAccess::ReadWrite
	}
}

impl PartialEq for PropertyKey {
	fn eq(&self, other: &Self) -> bool {
		self.0.id == other.0.id
	}
}

impl Eq for PropertyKey {}

impl core::hash::Hash for PropertyKey {
	fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
		self.0.id.hash(state);
	}
}

impl core::fmt::Debug for PropertyKey {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "PropertyKey({})", self.0.name)
	}
}

impl core::fmt::Display for PropertyKey {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.0.name)
	}
}

/// Registry of all property definitions, builtin or declared by a host crate.
#[distributed_slice]
pub static PROPERTIES: [PropertyDef];

/// Finds a property by display name.
pub fn find(name: &str) -> Option<PropertyKey> {
	PROPERTIES
		.iter()
		.find(|def| def.name == name)
		.map(PropertyKey::new)
}

/// Returns all registered properties, sorted by display name.
pub fn all() -> Vec<PropertyKey> {
	let mut props: Vec<_> = PROPERTIES.iter().map(PropertyKey::new).collect();
	props.sort_by_key(|key| key.name());
	props
}

/// Error type for property value validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
	/// The property cannot be written.
	#[error("property '{0}' is read-only")]
	ReadOnly(&'static str),
	/// The value type does not match the property's declared type.
	#[error("type mismatch for property '{property}': expected {expected:?}, got {got}")]
	TypeMismatch {
		/// The property's display name.
		property: &'static str,
		/// The expected type.
		expected: PropertyType,
		/// The actual type name of the provided value.
		got: &'static str,
	},
}

/// Validates that `value` may be written to `key`.
pub fn validate(key: PropertyKey, value: &PropertyValue) -> Result<(), PropertyError> {
	let def = key.def();
	if def.access == PropertyAccess::ReadOnly {
		return Err(PropertyError::ReadOnly(def.name));
	}
	if !value.matches_type(def.value_type) {
		return Err(PropertyError::TypeMismatch {
			property: def.name,
			expected: def.value_type,
			got: value.type_name(),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests;
