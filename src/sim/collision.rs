//! Overlap tests between square entities
//!
//! Every entity is an axis-aligned square centered on its position with a
//! side length equal to its size. Eating happens on overlap, so the test is
//! inclusive: touching edges count.

use glam::Vec2;

/// Anything that occupies an axis-aligned square in the arena
pub trait Square {
    /// Center of the square
    fn center(&self) -> Vec2;
    /// Side length
    fn size(&self) -> f32;
}

/// AABB overlap between two squares (inclusive on the edges)
pub fn overlaps(a: &impl Square, b: &impl Square) -> bool {
    squares_overlap(a.center(), a.size(), b.center(), b.size())
}

/// AABB overlap on raw centers and sizes
#[inline]
pub fn squares_overlap(a_center: Vec2, a_size: f32, b_center: Vec2, b_size: f32) -> bool {
    let reach = a_size / 2.0 + b_size / 2.0;
    let delta = (a_center - b_center).abs();
    delta.x <= reach && delta.y <= reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Sq(Vec2, f32);

    impl Square for Sq {
        fn center(&self) -> Vec2 {
            self.0
        }
        fn size(&self) -> f32 {
            self.1
        }
    }

    #[test]
    fn test_coincident_centers_overlap() {
        assert!(overlaps(&Sq(Vec2::ZERO, 30.0), &Sq(Vec2::ZERO, 20.0)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        // Half sizes 10 + 5 = 15
        assert!(overlaps(
            &Sq(Vec2::ZERO, 20.0),
            &Sq(Vec2::new(15.0, 0.0), 10.0)
        ));
        assert!(!overlaps(
            &Sq(Vec2::ZERO, 20.0),
            &Sq(Vec2::new(15.1, 0.0), 10.0)
        ));
    }

    #[test]
    fn test_diagonal_corner_is_square_not_circle() {
        // Corner-to-corner at (14, 14): inside the AABB, outside a circle of radius 15
        assert!(overlaps(
            &Sq(Vec2::ZERO, 20.0),
            &Sq(Vec2::new(14.0, 14.0), 10.0)
        ));
    }

    #[test]
    fn test_one_axis_is_not_enough() {
        assert!(!overlaps(
            &Sq(Vec2::ZERO, 20.0),
            &Sq(Vec2::new(0.0, 40.0), 10.0)
        ));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, asz in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bsz in 0.0f32..100.0,
        ) {
            let a = Sq(Vec2::new(ax, ay), asz);
            let b = Sq(Vec2::new(bx, by), bsz);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
