//! Sphere primitive for ray tracing.

use crate::{
    hittable::{Hit, Hittable, SurfaceProperties},
    Ray,
};
use prism_math::{normalize, solve_quadratic, Vec2, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    /// Cached radius squared
    radius2: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        let radius = radius.max(0.0);
        Self {
            center,
            radius,
            radius2: radius * radius,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // analytic solution
        let l = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(l);
        let c = l.dot(l) - self.radius2;

        let (t0, t1) = solve_quadratic(a, b, c)?;

        // Origin inside the sphere: take the far root
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            return None;
        }

        Some(Hit {
            t,
            index: 0,
            uv: Vec2::ZERO,
        })
    }

    fn surface_properties(&self, point: Vec3, _direction: Vec3, _hit: &Hit) -> SurfaceProperties {
        SurfaceProperties {
            normal: normalize(point - self.center),
            st: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_distance() {
        let center = Vec3::new(1.0, 2.0, -10.0);
        let sphere = Sphere::new(center, 2.0);

        let origin = Vec3::new(-3.0, 0.5, 4.0);
        let ray = Ray::new(origin, (center - origin).normalize());

        let hit = sphere.intersect(&ray).unwrap();
        let expected = (center - origin).length() - 2.0;
        assert!((hit.t - expected).abs() < 1e-4, "t={} expected={}", hit.t, expected);
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 3.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = sphere.intersect(&ray).unwrap();

        let props = sphere.surface_properties(ray.at(hit.t), ray.direction(), &hit);
        assert!((props.normal - Vec3::Z).length() < 1e-5);
        assert_eq!(props.st, Vec3::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sphere radius must be positive")]
    fn test_non_positive_radius_asserts() {
        Sphere::new(Vec3::ZERO, 0.0);
    }
}
