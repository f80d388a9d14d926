//! Open/closed
//!
//! A type should be extendable without modifying the type itself. Here a
//! rectangle has to be fed to an API that insists on a `name()` accessor.

use std::any::Any;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::{banner, DemoConfig};
use crate::capability::Capability;
use crate::collaborator::{Collaborator, Named};
use crate::coordinator::Coordinator;
use crate::error::Result;
use crate::narrator::Narrator;
use crate::shape::GeometricRectangle;

/// The API that wants everything to have a name
pub fn announce(item: &dyn Named, out: &dyn Narrator) {
    out.say(item.name());
}

/// Reopen the rectangle type and bolt a name onto it
pub mod bad {
    use super::*;

    /// Copy of the geometric rectangle, edited to fit one caller
    #[derive(Debug, Clone, PartialEq)]
    pub struct GeometricRectangle {
        pub width: u32,
        pub height: u32,
        pub name: String,
    }

    impl GeometricRectangle {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                name: String::new(),
            }
        }

        pub fn area(&self) -> u64 {
            u64::from(self.width) * u64::from(self.height)
        }
    }

    impl Named for GeometricRectangle {
        fn name(&self) -> &str {
            &self.name
        }
    }
}

/// A name composed onto any value, leaving the value's type untouched
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled<T> {
    inner: T,
    name: String,
}

impl<T> Labeled<T> {
    pub fn new(inner: T, name: impl Into<String>) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Deref for Labeled<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for Labeled<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Named for Labeled<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: 'static> Collaborator for Labeled<T> {
    fn label(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }
}

const RECTANGLE_NAME: &str = "I'm a rectangle";

pub fn bad_practice(_config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "BAD PRACTICE");

    let mut shape = bad::GeometricRectangle::new(2, 5);
    shape.name = RECTANGLE_NAME.to_string();
    announce(&shape, out);
    out.say(&format!(
        "Every rectangle now carries a name field, needed or not (area {})",
        shape.area()
    ));

    Ok(())
}

pub fn good_practice(_config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "GOOD PRACTICE");

    let shape = GeometricRectangle::new(2, 5);
    let mut registry = Coordinator::new("name registry", [Capability::Name]);

    if let Err(err) = registry.assign(Arc::new(shape)) {
        out.say(&format!("A plain rectangle has no name: {}", err));
    }

    let labeled = Labeled::new(shape, RECTANGLE_NAME);
    out.say(&format!("The labeled rectangle still has area {}", labeled.area()));
    registry.assign(Arc::new(labeled))?;
    registry.invoke(Capability::Name, out);

    Ok(())
}

pub fn walkthrough(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    bad_practice(config, out)?;
    good_practice(config, out)
}
