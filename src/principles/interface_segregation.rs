//! Interface segregation
//!
//! Clients must not be forced to implement an interface they don't use.

use std::sync::Arc;

use super::{banner, DemoConfig};
use crate::capability::Capability;
use crate::collaborator::{Collaborator, Eatable, Workable};
use crate::coordinator::Coordinator;
use crate::error::Result;
use crate::narrator::Narrator;
use crate::workforce::{Robot, SuperWorker, Worker, SUPER_WORKER_LUNCH, WORKER_LUNCH};

/// One universal worker interface, one manager for everything
pub mod bad {
    use super::*;

    /// Everything a worker might ever be asked to do
    pub trait AbstractWorker {
        fn work(&self, out: &dyn Narrator);
        fn eat(&self, out: &dyn Narrator);
    }

    impl AbstractWorker for Worker {
        fn work(&self, out: &dyn Narrator) {
            Workable::work(self, out);
        }

        fn eat(&self, out: &dyn Narrator) {
            Eatable::eat(self, out);
        }
    }

    impl AbstractWorker for SuperWorker {
        fn work(&self, out: &dyn Narrator) {
            Workable::work(self, out);
        }

        fn eat(&self, out: &dyn Narrator) {
            Eatable::eat(self, out);
        }
    }

    /// A robot that has to pretend it eats
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Robot;

    impl AbstractWorker for Robot {
        fn work(&self, out: &dyn Narrator) {
            out.say("I'm a robot. I'm working....");
        }

        fn eat(&self, out: &dyn Narrator) {
            out.say("I don't need to eat....");
        }
    }

    #[derive(Default)]
    pub struct Manager {
        worker: Option<Box<dyn AbstractWorker>>,
    }

    impl Manager {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_worker(&mut self, worker: Box<dyn AbstractWorker>) {
            self.worker = Some(worker);
        }

        pub fn manage(&self, out: &dyn Narrator) {
            if let Some(worker) = &self.worker {
                worker.work(out);
            }
        }

        pub fn lunch_break(&self, out: &dyn Narrator) {
            if let Some(worker) = &self.worker {
                worker.eat(out);
            }
        }
    }
}

/// Separate capabilities, separate managers
pub mod good {
    use super::*;

    /// Delegates work to anything [`Workable`]
    pub struct WorkManager {
        coordinator: Coordinator,
    }

    impl WorkManager {
        pub fn new() -> Self {
            Self {
                coordinator: Coordinator::new("work manager", [Capability::Work]),
            }
        }

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

    impl Default for WorkManager {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Sends anything [`Eatable`] on lunch break
    pub struct BreakManager {
        coordinator: Coordinator,
    }

    impl BreakManager {
        pub fn new() -> Self {
            Self {
                coordinator: Coordinator::new("break manager", [Capability::Eat]),
            }
        }

        pub fn set_worker(&mut self, worker: Arc<dyn Collaborator>) -> Result<()> {
            self.coordinator.assign(worker)
        }

        pub fn lunch_break(&self, out: &dyn Narrator) {
            self.coordinator.invoke(Capability::Eat, out);
        }

        pub fn coordinator(&self) -> &Coordinator {
            &self.coordinator
        }
    }

    impl Default for BreakManager {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub fn bad_practice(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "BAD PRACTICE");

    let mut manager = bad::Manager::new();
    manager.set_worker(Box::new(Worker::with_pause(config.lunch_pause(WORKER_LUNCH))));
    manager.manage(out);
    manager.lunch_break(out);

    manager.set_worker(Box::new(SuperWorker::with_pause(
        config.lunch_pause(SUPER_WORKER_LUNCH),
    )));
    manager.manage(out);
    manager.lunch_break(out);

    // The robot is forced to implement `eat`, so the manager happily sends it to lunch
    manager.set_worker(Box::new(bad::Robot));
    manager.manage(out);
    manager.lunch_break(out);

    Ok(())
}

pub fn good_practice(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "GOOD PRACTICE");

    let mut work_manager = good::WorkManager::new();
    let mut break_manager = good::BreakManager::new();

    work_manager.set_worker(Arc::new(Worker::with_pause(config.lunch_pause(WORKER_LUNCH))))?;
    break_manager.set_worker(Arc::new(Worker::with_pause(config.lunch_pause(WORKER_LUNCH))))?;
    work_manager.manage(out);
    break_manager.lunch_break(out);

    let super_worker: Arc<dyn Collaborator> = Arc::new(SuperWorker::with_pause(
        config.lunch_pause(SUPER_WORKER_LUNCH),
    ));
    work_manager.set_worker(Arc::clone(&super_worker))?;
    break_manager.set_worker(super_worker)?;
    work_manager.manage(out);
    break_manager.lunch_break(out);

    let robot: Arc<dyn Collaborator> = Arc::new(Robot);
    work_manager.set_worker(Arc::clone(&robot))?;
    work_manager.manage(out);
    match break_manager.set_worker(robot) {
        Ok(()) => break_manager.lunch_break(out),
        Err(err) => out.say(&format!("The robot gets no lunch break: {}", err)),
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
    use crate::narrator::Transcript;
    use crate::workforce::Sluggard;

    #[test]
    fn test_universal_manager_sends_robot_to_lunch() {
        let mut manager = bad::Manager::new();
        let out = Transcript::new();

        manager.set_worker(Box::new(bad::Robot));
        manager.manage(&out);
        manager.lunch_break(&out);

        assert_eq!(
            out.lines(),
            vec!["I'm a robot. I'm working....", "I don't need to eat...."]
        );
    }

    #[test]
    fn test_universal_manager_without_worker_is_noop() {
        let manager = bad::Manager::new();
        let out = Transcript::new();

        manager.manage(&out);
        manager.lunch_break(&out);

        assert!(out.is_empty());
    }

    #[test]
    fn test_robot_accepted_by_work_manager_only() {
        let mut work_manager = good::WorkManager::new();
        let mut break_manager = good::BreakManager::new();

        assert!(work_manager.set_worker(Arc::new(Robot)).is_ok());
        let err = break_manager.set_worker(Arc::new(Robot)).unwrap_err();

        assert_eq!(err.missing_capabilities(), &[Capability::Eat]);
        assert!(!break_manager.coordinator().is_assigned());
    }

    #[test]
    fn test_sluggard_accepted_by_break_manager_only() {
        let mut work_manager = good::WorkManager::new();
        let mut break_manager = good::BreakManager::new();

        assert!(work_manager.set_worker(Arc::new(Sluggard::new())).is_err());
        assert!(break_manager.set_worker(Arc::new(Sluggard::new())).is_ok());
    }

    #[test]
    fn test_same_worker_shared_by_both_managers() {
        let mut work_manager = good::WorkManager::new();
        let mut break_manager = good::BreakManager::new();
        let out = Transcript::new();

        let worker: Arc<dyn Collaborator> = Arc::new(Worker::new());
        work_manager.set_worker(Arc::clone(&worker)).unwrap();
        break_manager.set_worker(Arc::clone(&worker)).unwrap();
        work_manager.manage(&out);
        break_manager.lunch_break(&out);

        assert_eq!(
            out.lines(),
            vec!["I'm normal worker. I'm working.", "Lunch break....(5 secs)"]
        );
        assert_eq!(Arc::strong_count(&worker), 3);
    }

    #[test]
    fn test_walkthrough_narration() {
        let out = Transcript::new();
        walkthrough(&DemoConfig::default(), &out).unwrap();

        assert!(out.contains("I don't need to eat...."));
        assert!(out.contains("The robot gets no lunch break"));

        let lines = out.lines();
        let good_start = lines.iter().position(|l| l == "GOOD PRACTICE").unwrap();
        assert!(!lines[good_start..].iter().any(|l| l == "I don't need to eat...."));
    }
}
