//! SOLID principles walkthroughs built around capability-gated coordinators

pub mod capability;
pub mod collaborator;
pub mod coordinator;
pub mod error;
pub mod narrator;
pub mod principles;
pub mod shape;
pub mod workforce;

pub use capability::{Capability, CapabilitySet};
pub use collaborator::{Collaborator, Eatable, Named, Workable};
pub use coordinator::{Coordinator, CoordinatorEvent};
pub use error::{Requirement, Result, SolidError};
pub use narrator::{Narrator, Stdout, Transcript};
pub use principles::{run, run_captured, DemoConfig, Principle, RunReport};
