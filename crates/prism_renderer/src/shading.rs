//! Recursive Whitted-style shading.
//!
//! `cast_ray` follows one ray through the scene and returns the color seen
//! along it. Each hit combines Phong direct lighting with partial shadows,
//! and reflective/refractive surfaces spawn two more rays. A see-through
//! surface also spawns a continuation ray that carries on past it. Every
//! secondary ray goes one level deeper; once the depth passes
//! `Camera::max_recursions` the background is returned.

use crate::{
    hittable::{Hittable, SurfaceProperties},
    trace::trace,
    Camera, Color, MaterialKind, Ray, Scene, Surface,
};
use prism_math::{fresnel, normalize, reflect, refract, Vec3};

/// Marks reflective/refractive hits whose normal ends up facing along the
/// incoming ray, which sound geometry never produces.
pub const SENTINEL_COLOR: Color = Color::new(1.0, 0.0, 1.0);

/// Everything the shader needs to know about one hit.
struct ShadingPoint<'a> {
    direction: Vec3,
    point: Vec3,
    /// Geometric normal, flipped to face against `direction`
    normal: Vec3,
    st: Vec3,
    surface: &'a Surface,
    depth: u32,
}

/// Compute the color seen along `ray`.
///
/// `depth` is the recursion level of this ray (0 for primary rays).
/// `ignore` is skipped by the first intersection test; continuation rays
/// pass the surface they start on.
pub fn cast_ray(
    ray: &Ray,
    scene: &Scene,
    camera: &Camera,
    depth: u32,
    ignore: Option<&Surface>,
) -> Color {
    if depth > camera.max_recursions {
        return camera.background;
    }

    let Some(isect) = trace(ray, scene.surfaces(), ignore) else {
        return camera.background;
    };

    let point = ray.at(isect.hit.t);
    let SurfaceProperties { mut normal, st } =
        isect.surface.surface_properties(point, ray.direction(), &isect.hit);

    // Leaving the surface: make the normal face the ray
    if ray.direction().dot(normal) > 0.0 {
        normal = -normal;
    }

    let sp = ShadingPoint {
        direction: ray.direction(),
        point,
        normal,
        st,
        surface: isect.surface,
        depth,
    };

    match isect.surface.material().kind {
        MaterialKind::ReflectiveRefractive => shade_reflective_refractive(&sp, scene, camera),
        MaterialKind::DiffuseGlossy | MaterialKind::Reflective => {
            let local = direct_lighting(&sp, scene, camera);
            blend_transparency(local, &sp, scene, camera)
        }
    }
}

/// Fresnel-weighted reflection and refraction, mixed with local lighting
/// by the material's `reflection` weight.
fn shade_reflective_refractive(sp: &ShadingPoint, scene: &Scene, camera: &Camera) -> Color {
    let material = sp.surface.material();
    let (dir, n) = (sp.direction, sp.normal);

    let reflection_dir = normalize(reflect(dir, n));
    let refraction_dir = normalize(refract(dir, n, material.ior));

    let reflection_ray = Ray::new(offset_origin(sp.point, n, reflection_dir, camera.bias), reflection_dir);
    let refraction_ray = Ray::new(offset_origin(sp.point, n, refraction_dir, camera.bias), refraction_dir);

    let reflection_color = cast_ray(&reflection_ray, scene, camera, sp.depth + 1, None);
    let refraction_color = cast_ray(&refraction_ray, scene, camera, sp.depth + 1, None);

    let kr = fresnel(dir, n, material.ior);
    let blended = substitute_sentinel(
        reflection_color * kr + refraction_color * (1.0 - kr),
        camera.background,
        n,
        dir,
    );

    if material.reflection >= 1.0 {
        return blended;
    }

    let local = blend_transparency(direct_lighting(sp, scene, camera), sp, scene, camera);
    blended * material.reflection + local * (1.0 - material.reflection)
}

/// Replace a blend that came back as exactly the background when the
/// normal does not face against the ray.
fn substitute_sentinel(blended: Color, background: Color, normal: Vec3, direction: Vec3) -> Color {
    if blended != background {
        return blended;
    }
    if normal.dot(direction) >= 0.0 {
        log::trace!("Normal {normal} faces along ray {direction}, using sentinel color");
        SENTINEL_COLOR
    } else {
        background
    }
}

/// Phong diffuse + specular from every light, with partial shadows.
///
/// An occluder between the point and a light scales that light's diffuse
/// contribution by `1 - min(2 * alpha, 1)` of the occluder, so an opaque
/// one blocks it completely. The shaded surface never shadows itself.
fn direct_lighting(sp: &ShadingPoint, scene: &Scene, camera: &Camera) -> Color {
    let material = sp.surface.material();
    let (dir, n) = (sp.direction, sp.normal);

    let shadow_origin = if dir.dot(n) < 0.0 {
        sp.point + n * camera.bias
    } else {
        sp.point - n * camera.bias
    };

    let mut diffuse = Color::ZERO;
    let mut specular = Color::ZERO;

    for light in scene.lights() {
        let to_light = light.position - sp.point;
        // square of the distance between the point and the light
        let light_distance2 = to_light.dot(to_light);
        let light_dir = normalize(to_light);
        let l_dot_n = light_dir.dot(n).max(0.0);

        let shadow_ray = Ray::new(shadow_origin, light_dir);
        let occlusion = match trace(&shadow_ray, scene.surfaces(), None) {
            Some(occluder)
                if occluder.hit.t * occluder.hit.t < light_distance2
                    && !occluder.surface.is(sp.surface) =>
            {
                (occluder.surface.material().alpha * 2.0).min(1.0)
            }
            _ => 0.0,
        };

        diffuse += (1.0 - occlusion) * light.intensity * l_dot_n * light.color;

        let reflection_dir = reflect(-light_dir, n);
        specular += (-reflection_dir.dot(dir)).max(0.0).powf(material.specular_exponent) * light.intensity;
    }

    diffuse * material.diffuse_at(sp.st) * material.kd + specular * material.ks
}

/// Mix `local` with whatever lies behind the surface, weighted by its alpha.
fn blend_transparency(local: Color, sp: &ShadingPoint, scene: &Scene, camera: &Camera) -> Color {
    let material = sp.surface.material();
    let alpha = material.alpha;
    let behind = if material.is_transparent() {
        let continuation = Ray::new(sp.point, sp.direction);
        cast_ray(&continuation, scene, camera, sp.depth + 1, Some(sp.surface))
    } else {
        Color::ZERO
    };
    local * alpha + behind * (1.0 - alpha)
}

/// Nudge a secondary-ray origin off the surface, to the side `dir` heads to.
#[inline]
fn offset_origin(point: Vec3, normal: Vec3, dir: Vec3, bias: f32) -> Vec3 {
    if dir.dot(normal) < 0.0 {
        point - normal * bias
    } else {
        point + normal * bias
    }
}
