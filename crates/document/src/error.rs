//! Error types for document access.

use thiserror::Error;
use trellis_properties::PropertyError;

use crate::NodeId;

/// Errors returned by [`DocumentModel`](crate::DocumentModel) writes and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	/// The node does not exist in this document.
	#[error("unknown node {0}")]
	UnknownNode(NodeId),

	/// Resolution was requested for a node that is neither intrinsic nor concrete.
	#[error("node {0} cannot be resolved into a concrete instance")]
	NotIntrinsic(NodeId),

	/// A write targeted an intrinsic reference instead of its resolved instance.
	#[error("node {0} is an unresolved intrinsic reference")]
	Unresolved(NodeId),

	/// The node is not a grid container.
	#[error("node {0} is not a grid container")]
	NotAGrid(NodeId),

	/// The node's type does not have this property.
	#[error("node {node} has no property '{property}'")]
	UnsupportedProperty {
		/// Target node.
		node: NodeId,
		/// Display name of the property.
		property: &'static str,
	},

	/// The value was rejected by the property's metadata.
	#[error("node {node}: {source}")]
	Property {
		/// Target node.
		node: NodeId,
		/// Validation failure.
		#[source]
		source: PropertyError,
	},
}
