//! Capability-gated coordinator
//!
//! The coordinator handles:
//! - Holding at most one collaborator, checked against a required capability set on assignment
//! - Delegating gated operations to the held collaborator
//! - Event broadcasting

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::capability::{Capability, CapabilitySet};
use crate::collaborator::Collaborator;
use crate::error::{Requirement, Result, SolidError};
use crate::narrator::Narrator;

/// Events emitted by a coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoordinatorEvent {
    /// A collaborator was accepted
    CollaboratorAssigned {
        coordinator_id: Uuid,
        collaborator: String,
        replaced: Option<String>,
    },
    /// A collaborator was refused for lacking capabilities
    AssignmentRejected {
        coordinator_id: Uuid,
        collaborator: String,
        missing: Vec<Capability>,
    },
    /// An operation was delegated to the held collaborator
    OperationInvoked {
        coordinator_id: Uuid,
        collaborator: String,
        capability: Capability,
    },
    /// An invocation did nothing
    InvocationSkipped {
        coordinator_id: Uuid,
        capability: Capability,
    },
    /// The held collaborator was dropped
    CollaboratorCleared {
        coordinator_id: Uuid,
        collaborator: String,
    },
}

/// Holds one collaborator and delegates the operations it requires
pub struct Coordinator {
    id: Uuid,
    name: String,
    required: CapabilitySet,
    collaborator: Option<Arc<dyn Collaborator>>,
    assigned_at: Option<DateTime<Utc>>,
    event_tx: broadcast::Sender<CoordinatorEvent>,
}

impl Coordinator {
    /// Create a coordinator that accepts only collaborators providing `required`
    pub fn new(name: impl Into<String>, required: impl Into<CapabilitySet>) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            required: required.into(),
            collaborator: None,
            assigned_at: None,
            event_tx,
        }
    }

    /// Subscribe to coordinator events
    pub fn subscribe(&self) -> broadcast::Receiver<CoordinatorEvent> {
        self.event_tx.subscribe()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The capability gate
    pub fn required(&self) -> &CapabilitySet {
        &self.required
    }

    /// The currently held collaborator
    pub fn collaborator(&self) -> Option<&Arc<dyn Collaborator>> {
        self.collaborator.as_ref()
    }

    pub fn is_assigned(&self) -> bool {
        self.collaborator.is_some()
    }

    /// When the current collaborator was accepted
    pub fn assigned_at(&self) -> Option<DateTime<Utc>> {
        self.assigned_at
    }

    /// Check that `collaborator` could be assigned, without assigning it
    pub fn check(&self, collaborator: &dyn Collaborator) -> Result<()> {
        let missing = self.required().missing_from(&collaborator.capabilities());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SolidError::CapabilityMismatch {
                coordinator: self.name().to_string(),
                collaborator: collaborator.label().to_string(),
                unmet: Requirement::Capabilities(missing),
            })
        }
    }

    /// Assign a collaborator, replacing any previous one
    ///
    /// Fails if the collaborator lacks a required capability; the held
    /// collaborator is left untouched in that case.
    pub fn assign(&mut self, collaborator: Arc<dyn Collaborator>) -> Result<()> {
        if let Err(err) = self.check(collaborator.as_ref()) {
            tracing::info!(
                coordinator = %self.name,
                collaborator = collaborator.label(),
                "Rejected assignment: {}",
                err
            );
            let _ = self.event_tx.send(CoordinatorEvent::AssignmentRejected {
                coordinator_id: self.id,
                collaborator: collaborator.label().to_string(),
                missing: err.missing_capabilities().to_vec(),
            });
            return Err(err);
        }

        let label = collaborator.label().to_string();
        let replaced = self
            .collaborator
            .replace(collaborator)
            .map(|previous| previous.label().to_string());
        self.assigned_at = Some(Utc::now());

        tracing::debug!(coordinator = %self.name, collaborator = %label, "Assigned collaborator");
        let _ = self.event_tx.send(CoordinatorEvent::CollaboratorAssigned {
            coordinator_id: self.id,
            collaborator: label,
            replaced,
        });

        Ok(())
    }

    /// Drop the held collaborator, returning it
    pub fn clear(&mut self) -> Option<Arc<dyn Collaborator>> {
        let previous = self.collaborator.take()?;
        self.assigned_at = None;
        let _ = self.event_tx.send(CoordinatorEvent::CollaboratorCleared {
            coordinator_id: self.id,
            collaborator: previous.label().to_string(),
        });
        Some(previous)
    }

    /// Delegate `capability` to the held collaborator
    ///
    /// Does nothing when no collaborator is held, or when `capability` is not
    /// one this coordinator gates on.
    pub fn invoke(&self, capability: Capability, out: &dyn Narrator) {
        if !self.required.has(capability) {
            tracing::warn!(
                coordinator = %self.name,
                capability = capability.as_str(),
                "Operation is not delegated by this coordinator"
            );
            self.skipped(capability);
            return;
        }

        let Some(collaborator) = self.collaborator.as_deref() else {
            tracing::debug!(coordinator = %self.name, capability = capability.as_str(), "No collaborator assigned");
            self.skipped(capability);
            return;
        };

        let delegated = match capability {
            Capability::Work => collaborator.as_workable().map(|w| w.work(out)),
            Capability::Eat => collaborator.as_eatable().map(|e| e.eat(out)),
            Capability::Name => collaborator.as_named().map(|n| out.say(n.name())),
        };

        // Assignment already checked the gate, so a missing view means the
        // collaborator changed what it advertises.
        if delegated.is_none() {
            tracing::warn!(
                coordinator = %self.name,
                collaborator = collaborator.label(),
                capability = capability.as_str(),
                "Collaborator no longer provides capability"
            );
            self.skipped(capability);
            return;
        }

        tracing::debug!(
            coordinator = %self.name,
            collaborator = collaborator.label(),
            capability = capability.as_str(),
            "Invoked operation"
        );
        let _ = self.event_tx.send(CoordinatorEvent::OperationInvoked {
            coordinator_id: self.id,
            collaborator: collaborator.label().to_string(),
            capability,
        });
    }

    fn skipped(&self, capability: Capability) {
        let _ = self.event_tx.send(CoordinatorEvent::InvocationSkipped {
            coordinator_id: self.id,
            capability,
        });
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("required", &self.required)
            .field("collaborator", &self.collaborator.as_ref().map(|c| c.label()))
            .field("assigned_at", &self.assigned_at)
            .finish()
    }
}
