//! Random placement sampling
//!
//! Generators never own a random source. They borrow whatever `rand::Rng` the
//! caller hands in, so production code can pass `thread_rng()` while tests pass
//! a seeded `StdRng` or a constant `StepRng` and assert exact coordinates.

use rand::Rng;

use super::math::{Vec3, PI};

/// Uniform sampler over an injected random source
pub struct Sampler<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Sampler<'a, R> {
    /// Wrap a random source
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Uniform draw in `[0, 1)`
    pub fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform draw in `[-span / 2, span / 2)`
    pub fn centered(&mut self, span: f32) -> f32 {
        (self.unit() - 0.5) * span
    }

    /// Uniform draw in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    /// Point on the horizontal plane `y`, centered on the origin
    pub fn scatter(&mut self, span_x: f32, y: f32, span_z: f32) -> Vec3 {
        let x = self.centered(span_x);
        let z = self.centered(span_z);
        Vec3::new(x, y, z)
    }

    /// Point inside an origin-centered box
    pub fn scatter_box(&mut self, span: Vec3) -> Vec3 {
        let x = self.centered(span.x);
        let y = self.centered(span.y);
        let z = self.centered(span.z);
        Vec3::new(x, y, z)
    }

    /// Euler angles with every axis in `[0, PI)`
    pub fn euler(&mut self) -> Vec3 {
        let x = self.unit() * PI;
        let y = self.unit() * PI;
        let z = self.unit() * PI;
        Vec3::new(x, y, z)
    }
}
