//! Walkthroughs of the five SOLID principles
//!
//! Each principle module pairs a `bad_practice` walkthrough with a
//! `good_practice` one. Walkthroughs narrate through a [`Narrator`] and catch
//! expected capability mismatches locally, reporting them as narration.

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;
use crate::narrator::{Narrator, Transcript};

/// Settings shared by every walkthrough
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Really sleep through lunch breaks instead of only narrating them
    #[serde(default)]
    pub pause: bool,
}

impl DemoConfig {
    /// How long a lunch break of `nominal` length should block
    pub fn lunch_pause(&self, nominal: Duration) -> Duration {
        if self.pause {
            nominal
        } else {
            Duration::ZERO
        }
    }
}

/// The five principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// All principles in S-O-L-I-D order
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "single_responsibility",
            Principle::OpenClosed => "open_closed",
            Principle::LiskovSubstitution => "liskov_substitution",
            Principle::InterfaceSegregation => "interface_segregation",
            Principle::DependencyInversion => "dependency_inversion",
        }
    }

    /// Three-letter alias
    pub fn short(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "srp",
            Principle::OpenClosed => "ocp",
            Principle::LiskovSubstitution => "lsp",
            Principle::InterfaceSegregation => "isp",
            Principle::DependencyInversion => "dip",
        }
    }

    /// One-sentence statement of the principle
    pub fn summary(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => {
                "A type should be responsible for a single task."
            }
            Principle::OpenClosed => {
                "A type should be extendable without modifying the type itself."
            }
            Principle::LiskovSubstitution => {
                "A subtype must honor the behavior of the type it substitutes for."
            }
            Principle::InterfaceSegregation => {
                "Many specialized interfaces are better than one universal interface."
            }
            Principle::DependencyInversion => {
                "High-level code and low-level code should both depend on abstractions."
            }
        }
    }
}

impl std::fmt::Display for Principle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Principle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Principle::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized || p.short() == normalized)
            .ok_or_else(|| format!("Invalid principle: {}", s))
    }
}

/// Narration captured from one principle's walkthrough
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub principle: Principle,
    pub lines: Vec<String>,
}

/// Run both walkthroughs of `principle`
pub fn run(principle: Principle, config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    tracing::debug!(principle = principle.as_str(), "Running walkthrough");
    match principle {
        Principle::SingleResponsibility => single_responsibility::walkthrough(config, out),
        Principle::OpenClosed => open_closed::walkthrough(config, out),
        Principle::LiskovSubstitution => liskov_substitution::walkthrough(config, out),
        Principle::InterfaceSegregation => interface_segregation::walkthrough(config, out),
        Principle::DependencyInversion => dependency_inversion::walkthrough(config, out),
    }
}

/// Run `principle` into a fresh transcript
pub fn run_captured(principle: Principle, config: &DemoConfig) -> Result<RunReport> {
    let transcript = Transcript::new();
    run(principle, config, &transcript)?;
    Ok(RunReport {
        principle,
        lines: transcript.into_lines(),
    })
}

pub(crate) fn banner(out: &dyn Narrator, title: &str) {
    let rule = ">".repeat(10);
    out.say(&rule);
    out.say(title);
    out.say(&rule);
}
