//! The recursive shading engine.

use lumen_geometry::{Hit, Ray};
use lumen_math::{self as math, Color, Dir3, Vec3};
use lumen_scene::{Light, Scene};

/// Maximum recursion depth for global effects.
const MAX_CALC_COLOR_LEVEL: u32 = 10;

/// Attenuation floor: a recursion branch whose accumulated contribution
/// falls below this on every channel is pruned.
const MIN_CALC_COLOR_K: f64 = 0.001;

/// Whitted-style ray tracer over a read-only [`Scene`].
///
/// Tracing is a pure function of ray and scene: re-evaluating the same
/// ray always yields the same color, and recursion is bounded by both
/// the depth cap and the attenuation floor.
#[derive(Debug)]
pub struct RayTracer {
    scene: Scene,
}

impl RayTracer {
    /// Create a tracer for a scene.
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }

    /// The scene being traced.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Trace a ray to its final pixel color.
    ///
    /// Rays that hit nothing take the background color. Ambient light is
    /// added exactly once at the top level; it participates in neither
    /// the recursion nor the attenuation.
    pub fn trace_ray(&self, ray: &Ray) -> Color {
        match self.scene.geometries.closest_hit(ray) {
            None => self.scene.background,
            Some(hit) => self
                .calc_color(&hit, ray, MAX_CALC_COLOR_LEVEL, Vec3::repeat(1.0))
                .add(self.scene.ambient.intensity()),
        }
    }

    /// Color at a hit: emission plus local effects, plus global effects
    /// unless the recursion has bottomed out.
    fn calc_color(&self, hit: &Hit<'_>, ray: &Ray, level: u32, k: Vec3) -> Color {
        let color = hit.primitive.emission().add(self.local_effects(hit, ray));
        if level == 1 {
            return color;
        }
        color.add(self.global_effects(hit, ray, level, k))
    }

    /// Diffuse and specular contributions from every visible, unoccluded
    /// light source.
    fn local_effects(&self, hit: &Hit<'_>, ray: &Ray) -> Color {
        let n = hit.primitive.normal_at(&hit.point);
        let v = ray.direction;
        let nv = math::align_zero(n.dot(&v));
        if nv == 0.0 {
            return Color::BLACK;
        }

        let material = hit.primitive.material();
        let mut color = Color::BLACK;

        for light in &self.scene.lights {
            let Some(l) = light.direction_to(&hit.point) else {
                continue;
            };
            let nl = math::align_zero(n.dot(&l));
            // Light and viewer on opposite sides of the surface.
            if nl * nv <= 0.0 {
                continue;
            }

            let ktr = self.transparency(hit, light, l, n);
            if max_channel(ktr) < MIN_CALC_COLOR_K {
                continue;
            }

            let intensity = light.intensity_at(&hit.point).scale_rgb(ktr);
            color = color
                .add(intensity.scale_rgb(material.kd * nl.abs()))
                .add(specular(material.ks, material.shininess, l, n, v, intensity));
        }

        color
    }

    /// Accumulated transparency along the shadow ray toward a light.
    ///
    /// Starts at full transmission and multiplies in each occluder's `kt`;
    /// once the running factor drops below the floor the point is treated
    /// as fully shadowed and the scan stops early.
    fn transparency(&self, hit: &Hit<'_>, light: &Light, l: Dir3, n: Dir3) -> Vec3 {
        let shadow_ray = Ray::offset(hit.point, -l, n);
        let light_distance = light.distance_to(&hit.point);

        let mut ktr = Vec3::repeat(1.0);
        for occluder in self.scene.geometries.intersect(&shadow_ray) {
            if math::align_zero(occluder.distance_to(&hit.point) - light_distance) <= 0.0 {
                ktr = ktr.component_mul(&occluder.primitive.material().kt);
                if max_channel(ktr) < MIN_CALC_COLOR_K {
                    return Vec3::zeros();
                }
            }
        }
        ktr
    }

    /// Reflection and refraction contributions.
    ///
    /// Each branch is skipped when its coefficient times the accumulated
    /// attenuation falls below the floor on every channel — the key
    /// termination heuristic beyond the depth cap.
    fn global_effects(&self, hit: &Hit<'_>, ray: &Ray, level: u32, k: Vec3) -> Color {
        let n = hit.primitive.normal_at(&hit.point);
        let v = ray.direction;
        let material = hit.primitive.material();
        let mut color = Color::BLACK;

        let kkr = material.kr.component_mul(&k);
        if max_channel(kkr) >= MIN_CALC_COLOR_K {
            let reflected = reflected_ray(hit, v, n);
            color = color.add(self.global_branch(&reflected, level, kkr, material.kr));
        }

        let kkt = material.kt.component_mul(&k);
        if max_channel(kkt) >= MIN_CALC_COLOR_K {
            // Refraction is a straight pass-through ray; no Snell bending.
            let refracted = Ray::offset(hit.point, v, n);
            color = color.add(self.global_branch(&refracted, level, kkt, material.kt));
        }

        color
    }

    /// Trace one global-effects branch and scale it by its coefficient.
    fn global_branch(&self, ray: &Ray, level: u32, kk: Vec3, coefficient: Vec3) -> Color {
        match self.scene.geometries.closest_hit(ray) {
            None => Color::BLACK,
            Some(hit) => self
                .calc_color(&hit, ray, level - 1, kk)
                .scale_rgb(coefficient),
        }
    }
}

/// Mirror reflection of the view direction about the surface normal.
fn reflected_ray(hit: &Hit<'_>, v: Dir3, n: Dir3) -> Ray {
    let r = v.as_ref() - 2.0 * v.dot(&n) * n.as_ref();
    // v and n are never parallel-degenerate here: nv != 0 was checked by
    // the caller's shading path and r has the same length as v.
    Ray::offset(hit.point, Dir3::new_normalize(r), n)
}

/// Specular term: `ks * max(0, -v . r)^shininess`, with `r` the mirror
/// reflection of the light direction about the normal.
fn specular(ks: Vec3, shininess: i32, l: Dir3, n: Dir3, v: Dir3, intensity: Color) -> Color {
    let r = l.as_ref() - 2.0 * l.dot(&n) * n.as_ref();
    let minus_vr = math::align_zero(-v.dot(&r));
    if minus_vr <= 0.0 {
        return Color::BLACK;
    }
    intensity.scale_rgb(ks * minus_vr.powi(shininess))
}

/// Largest channel of a coefficient vector.
fn max_channel(k: Vec3) -> f64 {
    k.x.max(k.y).max(k.z)
}
