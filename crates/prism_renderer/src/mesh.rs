//! Ray intersection for indexed triangle meshes.
//!
//! Uses a one-sided Möller-Trumbore test: triangles are only visible from
//! the side where their winding gives a positive determinant.

use crate::{
    hittable::{Hit, Hittable, SurfaceProperties},
    Ray, TriangleMesh,
};
use prism_math::{normalize, Vec2, Vec3};

/// One-sided ray-triangle intersection.
///
/// Returns `(t, u, v)` with barycentric `u, v` of the hit. Back faces,
/// rays parallel to the triangle and hits behind the origin are rejected.
pub fn ray_triangle_intersect(v0: Vec3, v1: Vec3, v2: Vec3, ray: &Ray) -> Option<(f32, f32, f32)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let pvec = ray.direction().cross(edge2);
    let det = edge1.dot(pvec);

    // Parallel or seen from behind
    if det <= 0.0 {
        return None;
    }

    // u and v stay scaled by det until the range checks pass
    let tvec = ray.origin() - v0;
    let u = tvec.dot(pvec);
    if u < 0.0 || u > det {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction().dot(qvec);
    if v < 0.0 || u + v > det {
        return None;
    }

    let inv_det = 1.0 / det;
    let t = edge2.dot(qvec) * inv_det;
    // Behind the origin: would let geometry behind a shadow ray occlude it
    if t < 0.0 {
        return None;
    }

    Some((t, u * inv_det, v * inv_det))
}

impl Hittable for TriangleMesh {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        let mut t_near = f32::MAX;

        for (k, [v0, v1, v2]) in self.triangles().enumerate() {
            if let Some((t, u, v)) = ray_triangle_intersect(v0, v1, v2, ray) {
                if t < t_near {
                    t_near = t;
                    nearest = Some(Hit {
                        t,
                        index: k,
                        uv: Vec2::new(u, v),
                    });
                }
            }
        }

        nearest
    }

    fn surface_properties(&self, _point: Vec3, _direction: Vec3, hit: &Hit) -> SurfaceProperties {
        let [v0, v1, v2] = self.triangle(hit.index);
        let e0 = normalize(v1 - v0);
        let e1 = normalize(v2 - v1);
        let normal = normalize(e0.cross(e1));

        let [st0, st1, st2] = self.triangle_st(hit.index);
        let (u, v) = (hit.uv.x, hit.uv.y);
        let st = st0 * (1.0 - u - v) + st1 * u + st2 * v;

        SurfaceProperties { normal, st }
    }
}
