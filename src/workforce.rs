//! Workers, super workers and robots

use std::any::Any;
use std::time::Duration;

use crate::collaborator::{Collaborator, Eatable, Workable};
use crate::narrator::Narrator;

/// Nominal lunch break of a normal worker
pub const WORKER_LUNCH: Duration = Duration::from_secs(5);
/// Nominal lunch break of a super worker
pub const SUPER_WORKER_LUNCH: Duration = Duration::from_secs(3);

fn lunch_break(nominal: Duration, pause: Duration, out: &dyn Narrator) {
    out.say(&format!("Lunch break....({} secs)", nominal.as_secs()));
    if !pause.is_zero() {
        std::thread::sleep(pause);
    }
}

/// A normal worker: works and eats
#[derive(Debug, Clone, Default)]
pub struct Worker {
    pause: Duration,
}

impl Worker {
    /// A worker whose lunch break does not block
    pub fn new() -> Self {
        Self::default()
    }

    /// A worker whose lunch break sleeps for `pause`
    pub fn with_pause(pause: Duration) -> Self {
        Self { pause }
    }
}

impl Workable for Worker {
    fn work(&self, out: &dyn Narrator) {
        out.say("I'm normal worker. I'm working.");
    }
}

impl Eatable for Worker {
    fn eat(&self, out: &dyn Narrator) {
        lunch_break(WORKER_LUNCH, self.pause, out);
    }
}

impl Collaborator for Worker {
    fn label(&self) -> &str {
        "worker"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_workable(&self) -> Option<&dyn Workable> {
        Some(self)
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }
}

/// Works harder, eats faster
#[derive(Debug, Clone, Default)]
pub struct SuperWorker {
    pause: Duration,
}

impl SuperWorker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pause(pause: Duration) -> Self {
        Self { pause }
    }
}

impl Workable for SuperWorker {
    fn work(&self, out: &dyn Narrator) {
        out.say("I'm super worker. I work very hard!");
    }
}

impl Eatable for SuperWorker {
    fn eat(&self, out: &dyn Narrator) {
        lunch_break(SUPER_WORKER_LUNCH, self.pause, out);
    }
}

impl Collaborator for SuperWorker {
    fn label(&self) -> &str {
        "super worker"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_workable(&self) -> Option<&dyn Workable> {
        Some(self)
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }
}

/// Works, never eats
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot;

impl Workable for Robot {
    fn work(&self, out: &dyn Narrator) {
        out.say("I'm a robot. I'm working....");
    }
}

impl Collaborator for Robot {
    fn label(&self) -> &str {
        "robot"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_workable(&self) -> Option<&dyn Workable> {
        Some(self)
    }
}

/// Eats, never works
#[derive(Debug, Clone, Default)]
pub struct Sluggard {
    pause: Duration,
}

impl Sluggard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pause(pause: Duration) -> Self {
        Self { pause }
    }
}

impl Eatable for Sluggard {
    fn eat(&self, out: &dyn Narrator) {
        lunch_break(WORKER_LUNCH, self.pause, out);
    }
}

impl Collaborator for Sluggard {
    fn label(&self) -> &str {
        "sluggard"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::narrator::Transcript;

    #[test]
    fn test_worker_capabilities() {
        let caps = Worker::new().capabilities();
        assert!(caps.has(Capability::Work));
        assert!(caps.has(Capability::Eat));
        assert!(!caps.has(Capability::Name));
    }

    #[test]
    fn test_robot_only_works() {
        let caps = Robot.capabilities();
        assert!(caps.has(Capability::Work));
        assert!(!caps.has(Capability::Eat));
        assert!(Robot.as_eatable().is_none());
    }

    #[test]
    fn test_sluggard_only_eats() {
        let caps = Sluggard::new().capabilities();
        assert!(!caps.has(Capability::Work));
        assert!(caps.has(Capability::Eat));
    }

    #[test]
    fn test_lunch_break_narration() {
        let out = Transcript::new();
        Worker::new().eat(&out);
        SuperWorker::new().eat(&out);
        assert_eq!(
            out.lines(),
            vec!["Lunch break....(5 secs)", "Lunch break....(3 secs)"]
        );
    }

    #[test]
    fn test_sluggard_pause_is_honored() {
        let out = Transcript::new();
        let start = std::time::Instant::now();
        Sluggard::with_pause(Duration::from_millis(20)).eat(&out);
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(out.lines(), vec!["Lunch break....(5 secs)"]);
    }

    #[test]
    fn test_short_pause_is_honored() {
        let out = Transcript::new();
        let start = std::time::Instant::now();
        Worker::with_pause(Duration::from_millis(20)).eat(&out);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
