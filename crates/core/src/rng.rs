//! RNG module - where the next shape comes from
//!
//! Every spawn draws one shape uniformly from the 7 variants. The draw goes
//! through [`ShapeSource`] so games can be replayed from a seed
//! ([`SimpleRng`]) or scripted outright ([`ShapeSequence`]).

use crate::types::Shape;

/// Supplies the shape of each newly spawned piece.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with a short period; take the high half.
        (self.next_u32() >> 16) % max
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.next_range(Shape::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of shapes, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ShapeSequence {
    shapes: Vec<Shape>,
    index: usize,
}

impl ShapeSequence {
    /// An empty list falls back to `I` forever.
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        Self {
            shapes: shapes.into(),
            index: 0,
        }
    }

    /// Always the same shape
    pub fn repeat(shape: Shape) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapeSource for ShapeSequence {
    fn next_shape(&mut self) -> Shape {
        let Some(&shape) = self.shapes.get(self.index) else {
            return Shape::I;
        };
        self.index = (self.index + 1) % self.shapes.len();
        shape
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_shape(&mut self) -> Shape {
        (**self).next_shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_rng_range() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_every_shape_is_drawn() {
        let mut rng = SimpleRng::new(7);
        let mut counts = [0usize; 7];
        for _ in 0..7000 {
            counts[rng.next_shape() as usize] += 1;
        }
        // Roughly uniform: each shape near 1000.
        for count in counts {
            assert!(count > 700 && count < 1300, "skewed distribution: {counts:?}");
        }
    }

    #[test]
    fn test_sequence_wraps() {
        let mut seq = ShapeSequence::new(vec![Shape::T, Shape::O]);
        assert_eq!(seq.next_shape(), Shape::T);
        assert_eq!(seq.next_shape(), Shape::O);
        assert_eq!(seq.next_shape(), Shape::T);
    }

    #[test]
    fn test_empty_sequence_falls_back() {
        let mut seq = ShapeSequence::new(Vec::new());
        assert_eq!(seq.next_shape(), Shape::I);
    }
}
