//! Axis-aligned bounding-box collision predicate.
//!
//! Every module occupies a cube of edge `MODULE_EDGE_LENGTH * scale` centred on
//! its position. Rotation and shape are ignored: cylinders count as their
//! enclosing box and a rotated module keeps its unrotated box.

use crate::models::{Axis, Module, Vec3};

/// Nominal edge length of a module at scale 1.0, in metres.
pub const MODULE_EDGE_LENGTH: f64 = 4.0;

/// The geometry that participates in collision: centre and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Centre point
    pub position: Vec3,
    /// Uniform scale multiplier
    pub scale: f64,
}

impl Footprint {
    /// Creates a footprint from a centre and scale.
    #[must_use]
    pub const fn new(position: Vec3, scale: f64) -> Self {
        Self { position, scale }
    }

    /// Edge length of the bounding cube.
    #[must_use]
    pub fn edge(&self) -> f64 {
        MODULE_EDGE_LENGTH * self.scale
    }
}

impl From<&Module> for Footprint {
    fn from(module: &Module) -> Self {
        Self::new(module.position, module.scale)
    }
}

/// Returns true iff the two bounding cubes overlap on all three axes.
///
/// Touching faces (distance exactly equal to the summed half-edges) do not
/// collide. The test is symmetric.
///
/// ```
/// use habitat_planner::models::Vec3;
/// use habitat_planner::services::collision::{collides, Footprint};
///
/// let a = Footprint::new(Vec3::ZERO, 1.0);
/// let b = Footprint::new(Vec3::new(3.0, 0.0, 0.0), 1.0);
/// let c = Footprint::new(Vec3::new(4.0, 0.0, 0.0), 1.0);
/// assert!(collides(&a, &b));
/// assert!(!collides(&a, &c));
/// ```
#[must_use]
pub fn collides(a: &Footprint, b: &Footprint) -> bool {
    let reach = (a.edge() + b.edge()) / 2.0;
    Axis::ALL
        .iter()
        .all(|&axis| (a.position.get(axis) - b.position.get(axis)).abs() < reach)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(x: f64, y: f64, z: f64, scale: f64) -> Footprint {
        Footprint::new(Vec3::new(x, y, z), scale)
    }

    #[test]
    fn test_identical_position_collides() {
        assert!(collides(&fp(0.0, 0.0, 0.0, 1.0), &fp(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_separated_on_single_axis_does_not_collide() {
        // Overlapping on x and y but apart on z
        let a = fp(0.0, 0.0, 0.0, 1.0);
        let b = fp(1.0, 1.0, 10.0, 1.0);
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_touching_faces_do_not_collide() {
        let a = fp(0.0, 0.0, 0.0, 1.0);
        let b = fp(MODULE_EDGE_LENGTH, 0.0, 0.0, 1.0);
        assert!(!collides(&a, &b));

        let just_inside = fp(MODULE_EDGE_LENGTH - 0.001, 0.0, 0.0, 1.0);
        assert!(collides(&a, &just_inside));
    }

    #[test]
    fn test_scale_widens_reach() {
        let a = fp(0.0, 0.0, 0.0, 1.0);
        let b = fp(5.0, 0.0, 0.0, 1.0);
        assert!(!collides(&a, &b));

        // (4*2 + 4*1)/2 = 6 > 5
        let big_a = fp(0.0, 0.0, 0.0, 2.0);
        assert!(collides(&big_a, &b));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let cases = [
            (fp(0.0, 0.0, 0.0, 1.0), fp(2.0, -1.0, 3.0, 0.5)),
            (fp(0.0, 0.0, 0.0, 2.0), fp(5.0, 5.0, 5.0, 0.75)),
            (fp(-3.0, 0.0, 1.0, 1.5), fp(0.0, 0.0, 0.0, 1.0)),
        ];
        for (a, b) in cases {
            assert_eq!(collides(&a, &b), collides(&b, &a));
        }
    }
}
