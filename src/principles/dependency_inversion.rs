//! Dependency inversion
//!
//! High-level code should not depend on low-level details; both should depend
//! on abstractions.

use std::sync::Arc;

use super::{banner, DemoConfig};
use crate::capability::Capability;
use crate::collaborator::Collaborator;
use crate::coordinator::Coordinator;
use crate::error::Result;
use crate::narrator::Narrator;
use crate::workforce::{SuperWorker, Worker, SUPER_WORKER_LUNCH, WORKER_LUNCH};

/// A manager coupled to the concrete [`Worker`] type
pub mod bad {
    use super::*;
    use crate::collaborator::Workable;
    use crate::error::{Requirement, SolidError};

    #[derive(Default)]
    pub struct Manager {
        worker: Option<Arc<dyn Collaborator>>,
    }

    impl Manager {
        pub fn new() -> Self {
            Self::default()
        }

        /// Accepts only a [`Worker`], even if something else can work just as well
        pub fn set_worker(&mut self, worker: Arc<dyn Collaborator>) -> Result<()> {
            if worker.as_any().downcast_ref::<Worker>().is_none() {
                return Err(SolidError::CapabilityMismatch {
                    coordinator: "manager".to_string(),
                    collaborator: worker.label().to_string(),
                    unmet: Requirement::ConcreteType("Worker"),
                });
            }
            self.worker = Some(worker);
            Ok(())
        }

        pub fn manage(&self, out: &dyn Narrator) {
            let worker = self
                .worker
                .as_ref()
                .and_then(|w| w.as_any().downcast_ref::<Worker>());
            if let Some(worker) = worker {
                worker.work(out);
            }
        }

        pub fn worker(&self) -> Option<&Arc<dyn Collaborator>> {
            self.worker.as_ref()
        }
    }
}

/// A manager that depends only on the ability to work
pub mod good {
    use super::*;

    pub struct Manager {
        coordinator: Coordinator,
    }

    impl Manager {
        pub fn new() -> Self {
            Self {
                coordinator: Coordinator::new("manager", [Capability::Work]),
            }
        }

        /// Accepts anything that can work
        pub fn set_worker(&mut self, worker: Arc<dyn Collaborator>) -> Result<()> {
            self.coordinator.assign(worker)
        }

        pub fn manage(&self, out: &dyn Narrator) {
            self.coordinator.invoke(Capability::Work, out);
        }

        pub fn coordinator(&self) -> &Coordinator {
            &self.coordinator
        }
    }

    impl Default for Manager {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub fn bad_practice(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "BAD PRACTICE");

    let mut manager = bad::Manager::new();
    manager.set_worker(Arc::new(Worker::with_pause(config.lunch_pause(WORKER_LUNCH))))?;
    manager.manage(out);

    let super_worker = Arc::new(SuperWorker::with_pause(config.lunch_pause(SUPER_WORKER_LUNCH)));
    if let Err(err) = manager.set_worker(super_worker) {
        out.say(&format!("manager fails to support super worker.... ({})", err));
    }

    Ok(())
}

pub fn good_practice(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "GOOD PRACTICE");

    let mut manager = good::Manager::new();
    manager.set_worker(Arc::new(Worker::with_pause(config.lunch_pause(WORKER_LUNCH))))?;
    manager.manage(out);

    let super_worker = Arc::new(SuperWorker::with_pause(config.lunch_pause(SUPER_WORKER_LUNCH)));
    match manager.set_worker(super_worker) {
        Ok(()) => manager.manage(out),
        Err(err) => out.say(&format!("manager fails to support super worker.... ({})", err)),
    }

    Ok(())
}

pub fn walkthrough(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    bad_practice(config, out)?;
    good_practice(config, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Requirement, SolidError};
    use crate::narrator::Transcript;
    use crate::workforce::Robot;

    #[test]
    fn test_rigid_manager_accepts_worker() {
        let mut manager = bad::Manager::new();
        let out = Transcript::new();

        manager.set_worker(Arc::new(Worker::new())).unwrap();
        manager.manage(&out);

        assert_eq!(out.lines(), vec!["I'm normal worker. I'm working."]);
    }

    #[test]
    fn test_rigid_manager_rejects_super_worker() {
        let mut manager = bad::Manager::new();
        manager.set_worker(Arc::new(Worker::new())).unwrap();

        let err = manager.set_worker(Arc::new(SuperWorker::new())).unwrap_err();
        assert_eq!(
            err,
            SolidError::CapabilityMismatch {
                coordinator: "manager".to_string(),
                collaborator: "super worker".to_string(),
                unmet: Requirement::ConcreteType("Worker"),
            }
        );
        assert_eq!(manager.worker().unwrap().label(), "worker");
    }

    #[test]
    fn test_rigid_manager_without_worker_is_noop() {
        let out = Transcript::new();
        bad::Manager::new().manage(&out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_abstract_manager_accepts_any_worker() {
        let mut manager = good::Manager::new();
        let out = Transcript::new();

        manager.set_worker(Arc::new(SuperWorker::new())).unwrap();
        manager.manage(&out);
        manager.set_worker(Arc::new(Robot)).unwrap();
        manager.manage(&out);

        assert_eq!(
            out.lines(),
            vec!["I'm super worker. I work very hard!", "I'm a robot. I'm working...."]
        );
    }

    #[test]
    fn test_walkthrough_narration() {
        let out = Transcript::new();
        walkthrough(&DemoConfig::default(), &out).unwrap();

        assert!(out.contains("BAD PRACTICE"));
        assert!(out.contains("manager fails to support super worker"));
        assert!(out.contains("GOOD PRACTICE"));
        assert!(out.contains("I'm super worker. I work very hard!"));
    }
}
