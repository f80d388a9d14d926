//! Capability model for collaborators
//!
//! Defines the named operations a coordinator can require of a collaborator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Operations a collaborator may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Can perform work
    Work,
    /// Can take a lunch break
    Eat,
    /// Exposes a `name()` accessor
    Name,
}

impl Capability {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Work => "work",
            Capability::Eat => "eat",
            Capability::Name => "name",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Capability::Work),
            "eat" => Ok(Capability::Eat),
            "name" => Ok(Capability::Name),
            _ => Err(format!("Invalid capability: {}", s)),
        }
    }
}

/// A set of capabilities with helper methods
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    capabilities: HashSet<Capability>,
}

impl CapabilitySet {
    /// Create a new empty capability set
    pub fn new() -> Self {
        Self {
            capabilities: HashSet::new(),
        }
    }

    /// Check if this set contains a capability
    pub fn has(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }

    /// Check if every capability in `other` is in this set
    pub fn contains_all(&self, other: &CapabilitySet) -> bool {
        other.capabilities.is_subset(&self.capabilities)
    }

    /// Capabilities in this set that `offered` does not provide, sorted
    pub fn missing_from(&self, offered: &CapabilitySet) -> Vec<Capability> {
        let mut missing: Vec<Capability> = self
            .capabilities
            .difference(&offered.capabilities)
            .copied()
            .collect();
        missing.sort();
        missing
    }

    /// Add a capability
    pub fn add(&mut self, cap: Capability) {
        self.capabilities.insert(cap);
    }

    /// Remove a capability
    pub fn remove(&mut self, cap: Capability) {
        self.capabilities.remove(&cap);
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Convert to a sorted vec
    pub fn to_vec(&self) -> Vec<Capability> {
        let mut caps: Vec<Capability> = self.capabilities.iter().copied().collect();
        caps.sort();
        caps
    }
}

impl From<HashSet<Capability>> for CapabilitySet {
    fn from(capabilities: HashSet<Capability>) -> Self {
        Self { capabilities }
    }
}

impl From<Vec<Capability>> for CapabilitySet {
    fn from(capabilities: Vec<Capability>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Capability; N]> for CapabilitySet {
    fn from(capabilities: [Capability; N]) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.to_vec().iter().map(|c| c.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
