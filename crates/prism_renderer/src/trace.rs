//! Nearest-surface lookup by linear scan.

use crate::{
    hittable::{Hit, Hittable},
    Ray, Surface,
};

/// The nearest surface along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub hit: Hit,
    pub surface: &'a Surface,
}

/// Find the nearest surface hit by `ray`.
///
/// `ignore` names one surface that may not be reported. It is compared by
/// identity and only skipped when it would otherwise be the nearest so far,
/// which lets a ray leaving a see-through surface continue past it.
pub fn trace<'a>(ray: &Ray, surfaces: &'a [Surface], ignore: Option<&Surface>) -> Option<Intersection<'a>> {
    let mut nearest: Option<Intersection<'a>> = None;
    let mut t_near = f32::MAX;

    for surface in surfaces {
        let Some(hit) = surface.intersect(ray) else {
            continue;
        };
        if hit.t >= t_near {
            continue;
        }
        if ignore.is_some_and(|ignored| surface.is(ignored)) {
            continue;
        }
        t_near = hit.t;
        nearest = Some(Intersection { hit, surface });
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere, Vec3};

    fn row_of_spheres() -> Vec<Surface> {
        vec![
            Surface::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0), Material::default()),
            Surface::new(Sphere::new(Vec3::new(0.0, 0.0, -4.0), 1.0), Material::default()),
            Surface::new(Sphere::new(Vec3::new(5.0, 0.0, -4.0), 1.0), Material::default()),
        ]
    }

    #[test]
    fn test_trace_nearest() {
        let surfaces = row_of_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let isect = trace(&ray, &surfaces, None).unwrap();
        assert!(isect.surface.is(&surfaces[1]));
        assert!((isect.hit.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_trace_miss() {
        let surfaces = row_of_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(trace(&ray, &surfaces, None).is_none());
        assert!(trace(&ray, &[], None).is_none());
    }

    #[test]
    fn test_trace_ignore_skips_nearest() {
        let surfaces = row_of_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let isect = trace(&ray, &surfaces, Some(&surfaces[1])).unwrap();
        assert!(isect.surface.is(&surfaces[0]));
        assert!((isect.hit.t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_trace_ignore_is_identity() {
        let surfaces = row_of_spheres();
        let lookalike = surfaces[1].clone();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let isect = trace(&ray, &surfaces, Some(&lookalike)).unwrap();
        assert!(isect.surface.is(&surfaces[1]));
    }
}
