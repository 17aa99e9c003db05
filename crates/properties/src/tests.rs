use super::*;
use crate::property;

#[test]
fn test_keys_compare_by_id() {
	assert_eq!(keys::min_width, keys::min_width);
	assert_ne!(keys::min_width, keys::max_width);
	assert_eq!(keys::min_width.id(), "trellis-properties::min_width");
}

#[test]
fn test_display_name() {
	assert_eq!(keys::min_width.name(), "minWidth");
	assert_eq!(keys::visible.to_string(), "visible");
}

#[test]
fn test_defaults() {
	assert_eq!(keys::visible.default_value(), PropertyValue::Bool(true));
	assert_eq!(keys::min_width.default_value().as_float(), Some(-1.0));
	assert_eq!(keys::text.default_value().as_str(), Some(""));
}

#[test]
fn test_find_by_name() {
	assert_eq!(find("percentHeight"), Some(keys::percent_height));
	assert_eq!(find("percent_height"), None);
}

property!(border_width, {
	name: "borderWidth",
	type: Float,
	default: 0.0,
	access: ReadWrite,
	description: "Stroke width of a bordered region",
});

#[test]
fn test_declared_property_is_registered() {
	assert_eq!(find("borderWidth"), Some(border_width));
	assert!(all().contains(&border_width));
}

#[test]
fn test_builtins_are_registered() {
	for key in [keys::id, keys::layout_bounds, keys::fill_width, keys::percent_height] {
		assert_eq!(find(key.name()), Some(key));
	}
}

#[test]
fn test_all_names_unique() {
	let props = all();
	assert!(props.windows(2).all(|pair| pair[0].name() != pair[1].name()));
}

#[test]
fn test_float_sameness_by_bits() {
	let nan = PropertyValue::Float(f64::NAN);
	assert!(nan.is_same(&PropertyValue::Float(f64::NAN)));
	assert!(!PropertyValue::Float(0.0).is_same(&PropertyValue::Float(-0.0)));
	assert!(PropertyValue::from("a").is_same(&"a".into()));
	assert!(!PropertyValue::Int(1).is_same(&PropertyValue::Float(1.0)));
}

#[test]
fn test_validate_rejects_read_only() {
	assert_eq!(
		validate(keys::layout_bounds, &"x".into()),
		Err(PropertyError::ReadOnly("layoutBounds"))
	);
}

#[test]
fn test_validate_type_mismatch() {
	let err = validate(keys::visible, &PropertyValue::Int(1)).unwrap_err();
	assert_eq!(
		err,
		PropertyError::TypeMismatch {
			property: "visible",
			expected: PropertyType::Bool,
			got: "int",
		}
	);
}

#[test]
fn test_null_matches_every_type() {
	assert!(validate(keys::text, &PropertyValue::Null).is_ok());
	assert!(validate(keys::min_width, &PropertyValue::Null).is_ok());
}
