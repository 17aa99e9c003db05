//! Registration macro for properties.

/// Declares an editable property and registers it in [`PROPERTIES`](crate::PROPERTIES).
///
/// This macro generates:
/// - A static [`PropertyDef`](crate::PropertyDef) registered in the [`PROPERTIES`](crate::PROPERTIES) slice
/// - A public constant [`PropertyKey`](crate::PropertyKey) for type-safe references
///
/// # Example
///
/// ```ignore
/// property!(min_width, {
///     name: "minWidth",
///     type: Float,
///     default: -1.0,
///     access: ReadWrite,
///     description: "Minimum width of a grid column",
/// });
///
/// let default_value = min_width.default_value();
/// ```
///
/// The `name:` field is the display name used by the document and in job
/// descriptions.
#[macro_export]
macro_rules! property {
	($ident:ident, {
		name: $name:literal,
		type: $type:ident,
		default: $default:expr,
		access: $access:ident,
		description: $desc:expr
		$(,)?
	}) => {
		$crate::__paste::paste! {
			#[allow(non_upper_case_globals)]
			#[$crate::__linkme::distributed_slice($crate::PROPERTIES)]
			#[linkme(crate = $crate::__linkme)]
			static [<PROP_ $ident:upper>]: $crate::PropertyDef = $crate::PropertyDef {
				id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($ident)),
				name: $name,
				description: $desc,
				value_type: $crate::PropertyType::$type,
				default: || $crate::PropertyValue::$type($default),
				access: $crate::PropertyAccess::$access,
			};

			#[doc = concat!("Typed handle for the `", $name, "` property.")]
			#[allow(non_upper_case_globals)]
			pub const $ident: $crate::PropertyKey = $crate::PropertyKey::new(&[<PROP_ $ident:upper>]);
		}
	};
}
