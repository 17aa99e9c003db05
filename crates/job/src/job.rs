use trellis_document::DocumentModel;

use crate::{JobError, Result};

/// A reversible, describable unit of document mutation.
///
/// The document is borrowed for the duration of each call; jobs never keep
/// a reference to it. Calls must follow the lifecycle tracked by
/// [`JobState`]: `execute` once, then alternate `undo` and `redo`.
pub trait Job: std::fmt::Debug {
	/// Returns `true` if executing the job would change the document.
	fn is_executable(&self) -> bool;

	/// Current lifecycle state.
	fn state(&self) -> JobState;

	/// Applies the job.
	fn execute(&mut self, doc: &mut dyn DocumentModel) -> Result<()>;

	/// Reverts a previous [`execute`](Self::execute) or [`redo`](Self::redo).
	fn undo(&mut self, doc: &mut dyn DocumentModel) -> Result<()>;

	/// Re-applies the job after an [`undo`](Self::undo).
	fn redo(&mut self, doc: &mut dyn DocumentModel) -> Result<()>;

	/// Short label for undo history display.
	fn description(&self) -> String;
}

/// Operation requested on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOp {
	/// First application.
	Execute,
	/// Reversal.
	Undo,
	/// Re-application after undo.
	Redo,
}

impl std::fmt::Display for JobOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			JobOp::Execute => f.write_str("execute"),
			JobOp::Undo => f.write_str("undo"),
			JobOp::Redo => f.write_str("redo"),
		}
	}
}

/// Lifecycle of a job.
///
/// ```text
/// Planned ──execute──► Executed ──undo──► Undone
///                          ▲                │
///                          └──────redo──────┘
/// ```
///
/// Any failure moves the job to `Failed`, which accepts no further operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobState {
	/// Built but never executed.
	#[default]
	Planned,
	/// Changes are applied.
	Executed,
	/// Changes are reverted.
	Undone,
	/// An operation failed part way.
	Failed,
}

impl JobState {
	/// State reached by running `op` from `self`.
	pub fn after(self, op: JobOp) -> Result<JobState> {
		match (self, op) {
			(JobState::Planned, JobOp::Execute) => Ok(JobState::Executed),
			(JobState::Executed, JobOp::Undo) => Ok(JobState::Undone),
			(JobState::Undone, JobOp::Redo) => Ok(JobState::Executed),
			(state, op) => Err(JobError::InvalidState { op, state }),
		}
	}

	/// Runs `f` as `op`, advancing the state on success and failing it otherwise.
	pub(crate) fn run(&mut self, op: JobOp, f: impl FnOnce() -> Result<()>) -> Result<()> {
		let next = self.after(op)?;
		match f() {
			Ok(()) => {
				*self = next;
				Ok(())
			}
			Err(err) => {
				*self = JobState::Failed;
				Err(err)
			}
		}
	}
}
