//! Undoable edit jobs driven by the current selection.
//!
//! A [`Job`] is a reversible, describable unit of document mutation. The
//! building blocks are:
//!
//! * [`ModifyObjectJob`]: writes one property of one concrete node.
//! * [`BatchJob`]: runs an ordered list of sub-jobs as a unit.
//! * [`ModifySelectionJob`]: expands a [`Selection`] into concrete target
//!   nodes and batches one [`ModifyObjectJob`] per node that would actually
//!   change.
//!
//! ```text
//! Selection ──expand()──► candidates ──ModifyObjectJob::new──► executable?
//!                                                                  │ yes
//!                                   describe_batch() ◄── BatchJob ◄┘
//! ```

mod batch;
mod config;
mod describe;
mod error;
mod expand;
mod job;
mod modify_object;
mod modify_selection;
mod selection;

pub use batch::BatchJob;
pub use config::{ConfigError, DescribeConfig};
pub use describe::describe_batch;
pub use error::{JobError, Result};
pub use expand::{Expansion, expand};
pub use job::{Job, JobOp, JobState};
pub use modify_object::ModifyObjectJob;
pub use modify_selection::ModifySelectionJob;
pub use selection::{GridSelection, ObjectSelection, Selection, SelectionGroup};
