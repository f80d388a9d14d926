//! Single responsibility
//!
//! A rectangle that both measures and draws itself has two reasons to
//! change. Splitting it leaves geometry in one type and drawing in another.

use super::{banner, DemoConfig};
use crate::error::Result;
use crate::narrator::Narrator;
use crate::shape::GeometricRectangle;

fn draw_rows(width: u32, height: u32, glyph: char, out: &dyn Narrator) {
    let row: String = std::iter::repeat(glyph).take(width as usize).collect();
    for _ in 0..height {
        out.say(&row);
    }
}

/// One type, two responsibilities
pub mod bad {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Rectangle {
        pub width: u32,
        pub height: u32,
    }

    impl Rectangle {
        pub fn new(width: u32, height: u32) -> Self {
            Self { width, height }
        }

        pub fn draw(&self, out: &dyn Narrator) {
            draw_rows(self.width, self.height, '#', out);
        }

        pub fn area(&self) -> u64 {
            u64::from(self.width) * u64::from(self.height)
        }
    }
}

/// Draws geometric rectangles; knows nothing about area
#[derive(Debug, Clone, Copy)]
pub struct RectangleRenderer {
    glyph: char,
}

impl RectangleRenderer {
    pub fn new(glyph: char) -> Self {
        Self { glyph }
    }

    pub fn draw(&self, rect: &GeometricRectangle, out: &dyn Narrator) {
        draw_rows(rect.width, rect.height, self.glyph, out);
    }
}

impl Default for RectangleRenderer {
    fn default() -> Self {
        Self::new('#')
    }
}

pub fn bad_practice(_config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "BAD PRACTICE");

    let rect = bad::Rectangle::new(4, 2);
    out.say(&format!("Rectangle area: {}", rect.area()));
    rect.draw(out);

    Ok(())
}

pub fn good_practice(_config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "GOOD PRACTICE");

    let rect = GeometricRectangle::new(4, 2);
    out.say(&format!("Geometric rectangle area: {}", rect.area()));
    RectangleRenderer::new('*').draw(&rect, out);

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

    #[test]
    fn test_bad_rectangle_does_both() {
        let out = Transcript::new();
        let rect = bad::Rectangle::new(3, 2);

        rect.draw(&out);

        assert_eq!(rect.area(), 6);
        assert_eq!(out.lines(), vec!["###", "###"]);
    }

    #[test]
    fn test_renderer_draws_geometric_rectangle() {
        let out = Transcript::new();
        RectangleRenderer::default().draw(&GeometricRectangle::new(2, 3), &out);
        assert_eq!(out.lines(), vec!["##", "##", "##"]);
    }

    #[test]
    fn test_renderer_zero_height_draws_nothing() {
        let out = Transcript::new();
        RectangleRenderer::new('*').draw(&GeometricRectangle::new(5, 0), &out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_walkthrough_narration() {
        let out = Transcript::new();
        walkthrough(&DemoConfig::default(), &out).unwrap();

        assert!(out.contains("Rectangle area: 8"));
        assert!(out.contains("Geometric rectangle area: 8"));
        assert!(out.contains("****"));
    }
}
