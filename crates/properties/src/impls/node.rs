//! Properties shared by scene nodes.

use crate::property;

property!(id, {
	name: "id",
	type: String,
	default: String::new(),
	access: ReadWrite,
	description: "Document-wide identifier of the node",
});

property!(text, {
	name: "text",
	type: String,
	default: String::new(),
	access: ReadWrite,
	description: "Text content of labeled controls",
});

property!(visible, {
	name: "visible",
	type: Bool,
	default: true,
	access: ReadWrite,
	description: "Whether the node is rendered",
});

property!(disable, {
	name: "disable",
	type: Bool,
	default: false,
	access: ReadWrite,
	description: "Whether the node ignores input",
});

property!(opacity, {
	name: "opacity",
	type: Float,
	default: 1.0,
	access: ReadWrite,
	description: "Opacity between 0.0 and 1.0",
});

property!(style, {
	name: "style",
	type: String,
	default: String::new(),
	access: ReadWrite,
	description: "Inline style declarations",
});

property!(layout_bounds, {
	name: "layoutBounds",
	type: String,
	default: String::new(),
	access: ReadOnly,
	description: "Bounds computed by layout",
});
