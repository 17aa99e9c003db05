//! Row and column constraint properties of grid containers.
//!
//! Negative sizes mean "computed from content".

use crate::property;

property!(min_width, {
	name: "minWidth",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Minimum width of a column",
});

property!(pref_width, {
	name: "prefWidth",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Preferred width of a column",
});

property!(max_width, {
	name: "maxWidth",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Maximum width of a column",
});

property!(percent_width, {
	name: "percentWidth",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Width of a column as a percentage of the grid",
});

property!(fill_width, {
	name: "fillWidth",
	type: Bool,
	default: true,
	access: ReadWrite,
	description: "Whether cells stretch to the column width",
});

property!(min_height, {
	name: "minHeight",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Minimum height of a row",
});

property!(pref_height, {
	name: "prefHeight",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Preferred height of a row",
});

property!(max_height, {
	name: "maxHeight",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Maximum height of a row",
});

property!(percent_height, {
	name: "percentHeight",
	type: Float,
	default: -1.0,
	access: ReadWrite,
	description: "Height of a row as a percentage of the grid",
});

property!(fill_height, {
	name: "fillHeight",
	type: Bool,
	default: true,
	access: ReadWrite,
	description: "Whether cells stretch to the row height",
});
