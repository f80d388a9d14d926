//! Collaborator contracts
//!
//! A collaborator is anything a coordinator can hold. Each capability has its
//! own trait; a collaborator advertises which ones it supports through the
//! optional `as_*` views, and its capability set is derived from those views.

use std::any::Any;

use crate::capability::{Capability, CapabilitySet};
use crate::narrator::Narrator;

/// Something that can perform work
pub trait Workable {
    fn work(&self, out: &dyn Narrator);
}

/// Something that can take a lunch break
pub trait Eatable {
    fn eat(&self, out: &dyn Narrator);
}

/// Something with a display name, for APIs that insist on `name()`
pub trait Named {
    fn name(&self) -> &str;
}

/// A value that can be assigned into a coordinator
pub trait Collaborator: Any {
    /// Short human-readable label used in narration and errors
    fn label(&self) -> &str;

    /// Concrete type access, for managers coupled to a specific type
    fn as_any(&self) -> &dyn Any;

    fn as_workable(&self) -> Option<&dyn Workable> {
        None
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        None
    }

    fn as_named(&self) -> Option<&dyn Named> {
        None
    }

    /// Capabilities this collaborator provides
    fn capabilities(&self) -> CapabilitySet {
        let mut caps = CapabilitySet::new();
        if self.as_workable().is_some() {
            caps.add(Capability::Work);
        }
        if self.as_eatable().is_some() {
            caps.add(Capability::Eat);
        }
        if self.as_named().is_some() {
            caps.add(Capability::Name);
        }
        caps
    }
}
