//! Error types for capability gating

use thiserror::Error;

use crate::capability::Capability;

/// What a coordinator required that the offered collaborator did not provide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Capabilities the collaborator lacks
    Capabilities(Vec<Capability>),
    /// A specific concrete type, used by rigidly coupled managers
    ConcreteType(&'static str),
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Capabilities(caps) => {
                let names: Vec<&str> = caps.iter().map(|c| c.as_str()).collect();
                write!(f, "capabilities {{{}}}", names.join(", "))
            }
            Requirement::ConcreteType(name) => write!(f, "type `{}`", name),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolidError {
    #[error("Capability mismatch: {coordinator} cannot accept {collaborator}, missing {unmet}")]
    CapabilityMismatch {
        coordinator: String,
        collaborator: String,
        unmet: Requirement,
    },
}

impl SolidError {
    /// Capabilities the rejected collaborator was missing, if the requirement was capability-based
    pub fn missing_capabilities(&self) -> &[Capability] {
        match self {
            SolidError::CapabilityMismatch {
                unmet: Requirement::Capabilities(caps),
                ..
            } => caps,
            SolidError::CapabilityMismatch { .. } => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
