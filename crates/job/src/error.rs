//! Error types for job planning and execution.

use thiserror::Error;
use trellis_document::{DocumentError, GridAxis, NodeId, NodeKind};

use crate::{JobOp, JobState};

/// Errors produced while planning or running a job.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JobError {
	/// The job has nothing to do and refuses to run.
	#[error("job is not executable")]
	NotExecutable,

	/// The operation is not valid in the job's current state.
	#[error("cannot {op} a job in state {state:?}")]
	InvalidState {
		/// Requested operation.
		op: JobOp,
		/// State the job was in.
		state: JobState,
	},

	/// The document rejected a read or write.
	#[error(transparent)]
	Document(#[from] DocumentError),

	/// An intrinsic reference in the selection could not be resolved.
	///
	/// Nodes materialized for earlier items stay in the document and are
	/// listed so the host can discard them.
	#[error("cannot resolve {node}: {source}")]
	Unresolvable {
		/// The intrinsic reference.
		node: NodeId,
		/// Nodes allocated before the failure, in selection order.
		materialized: Vec<NodeId>,
		/// Failure reported by the document.
		#[source]
		source: DocumentError,
	},

	/// A grid selection names an index the container does not have.
	#[error("{ancestor} has no {axis} constraint at index {index}")]
	MissingConstraint {
		/// Grid container.
		ancestor: NodeId,
		/// Selected axis.
		axis: GridAxis,
		/// Missing index.
		index: usize,
	},

	/// The hierarchy mask returned a node that is not a constraint record.
	#[error("node {node} is {kind:?}, expected a constraint record")]
	NotAConstraint {
		/// Offending node.
		node: NodeId,
		/// Its actual kind, `None` if the node does not exist.
		kind: Option<NodeKind>,
	},

	/// A sub-job failed after the batch was planned; earlier sub-jobs stay applied.
	#[error("sub-job {index} failed to {op}: {source}")]
	Inconsistent {
		/// Operation that was running.
		op: JobOp,
		/// Position of the failing sub-job in the batch.
		index: usize,
		/// Failure reported by the sub-job.
		#[source]
		source: Box<JobError>,
	},
}

impl JobError {
	/// Returns `true` for errors that mean an engine invariant was broken.
	///
	/// Hosts must treat these as fatal: the document may be partially edited
	/// and retrying will not help.
	pub fn is_invariant_violation(&self) -> bool {
		matches!(
			self,
			JobError::MissingConstraint { .. }
				| JobError::NotAConstraint { .. }
				| JobError::Inconsistent { .. }
		)
	}
}

/// Result type for job operations.
pub type Result<T> = std::result::Result<T, JobError>;
