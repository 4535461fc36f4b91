//! Closed-form optics on `Vec3`: reflection, Snell refraction and Fresnel.
//!
//! All functions are pure. Degenerate inputs never panic: a zero vector
//! normalizes to itself, and total internal reflection shows up as a zero
//! refraction direction or a reflectance of exactly one.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// A zero-length vector is returned unchanged instead of dividing by zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let mag2 = v.length_squared();
    if mag2 > 0.0 {
        v / mag2.sqrt()
    } else {
        v
    }
}

/// Reflect `i` about the normal `n`.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - 2.0 * i.dot(n) * n
}

/// Refract `i` through a surface with normal `n` and index of refraction `ior`.
///
/// The side of the interface is taken from the sign of `dot(i, n)`: negative
/// means the ray enters the medium, otherwise it leaves it and the normal is
/// flipped. Returns `Vec3::ZERO` on total internal reflection.
pub fn refract(i: Vec3, n: Vec3, ior: f32) -> Vec3 {
    let mut cosi = clamp(-1.0, 1.0, i.dot(n));
    let (mut etai, mut etat) = (1.0, ior);
    let mut n = n;
    if cosi < 0.0 {
        cosi = -cosi;
    } else {
        std::mem::swap(&mut etai, &mut etat);
        n = -n;
    }
    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * i + (eta * cosi - k.sqrt()) * n
    }
}

/// Fraction of light reflected at a dielectric interface.
///
/// Averages the s- and p-polarised Fresnel terms. Transmittance is
/// `1 - fresnel(..)`. Returns 1 under total internal reflection.
pub fn fresnel(i: Vec3, n: Vec3, ior: f32) -> f32 {
    let cosi = clamp(-1.0, 1.0, i.dot(n));
    let (mut etai, mut etat) = (1.0, ior);
    if cosi > 0.0 {
        std::mem::swap(&mut etai, &mut etat);
    }

    // Snell's law
    let sint = etai / etat * (1.0 - cosi * cosi).max(0.0).sqrt();
    if sint >= 1.0 {
        return 1.0;
    }

    let cost = (1.0 - sint * sint).max(0.0).sqrt();
    let cosi = cosi.abs();
    let rs = ((etat * cosi) - (etai * cost)) / ((etat * cosi) + (etai * cost));
    let rp = ((etai * cosi) - (etat * cost)) / ((etai * cosi) + (etat * cost));
    (rs * rs + rp * rp) / 2.0
}

/// Linear blend: `a * (1 - t) + b * t`.
#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Clamp `v` into `[lo, hi]`.
#[inline]
pub fn clamp(lo: f32, hi: f32, v: f32) -> f32 {
    lo.max(hi.min(v))
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Solve `a*x^2 + b*x + c = 0`.
///
/// Uses the sign of `b` to avoid catastrophic cancellation. Returns `None`
/// when the discriminant is negative, otherwise the roots ordered so that
/// `x0 <= x1`.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discr = b * b - 4.0 * a * c;
    if discr < 0.0 {
        return None;
    }

    let (x0, x1) = if discr == 0.0 {
        let x = -0.5 * b / a;
        (x, x)
    } else {
        let q = if b > 0.0 {
            -0.5 * (b + discr.sqrt())
        } else {
            -0.5 * (b - discr.sqrt())
        };
        (q / a, c / q)
    };

    if x0 > x1 {
        Some((x1, x0))
    } else {
        Some((x0, x1))
    }
}
