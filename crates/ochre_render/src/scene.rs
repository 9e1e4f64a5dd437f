//! Scene query and shading contracts, plus the reference sphere scene.
//!
//! The render loop is decoupled from scene content: it asks a `SceneQuery`
//! for the nearest hit along each camera ray and a `Shader` for the color
//! of that hit. `SphereScene` is the reference `SceneQuery` implementation,
//! a linear scan over a list of spheres.

use crate::error::RenderError;
use ochre_math::{Interval, Ray, Vec3};

/// Record of a ray-scene intersection.
///
/// Contents are only meaningful after a query reports a hit; on a miss the
/// record is left untouched and must not be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitRecord {
    /// Point of intersection in world space
    pub point: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

/// Trait answering "what does this ray hit, nearest to its origin?".
///
/// `Send + Sync` so a scene can be shared across render workers.
pub trait SceneQuery: Send + Sync {
    /// Test the ray against the scene within the given parameter bounds.
    ///
    /// Returns true if something was hit, and fills in the hit record with
    /// the nearest accepted intersection.
    fn intersect(&self, ray: &Ray, t_bounds: Interval, rec: &mut HitRecord) -> bool;
}

/// Trait computing a pixel color from a hit.
pub trait Shader: Send + Sync {
    /// Shade a hit, returning RGBA in linear float.
    fn shade(&self, rec: &HitRecord) -> [f32; 4];
}

/// Optional hook invoked for rays that hit nothing.
///
/// The hook has no pixel output of its own; missed pixels keep their
/// opaque-black initialization. Callers use it for side effects such as
/// miss counting.
pub trait Background: Send + Sync {
    fn on_miss(&self);
}

/// A sphere primitive: center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius is not validated here; scene
    /// insertion via [`SphereScene::push`] is the validating path.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Test a ray against this sphere within the given parameter bounds.
    fn hit(&self, ray: &Ray, t_bounds: Interval, rec: &mut HitRecord) -> bool {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !t_bounds.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t_bounds.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.point = ray.at(root);
        rec.normal = (rec.point - self.center) / self.radius;

        true
    }
}

/// Reference scene: a growable list of spheres, scanned linearly.
#[derive(Debug, Default)]
pub struct SphereScene {
    spheres: Vec<Sphere>,
}

impl SphereScene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    ///
    /// Rejects non-positive and non-finite radii; a degenerate sphere
    /// would otherwise feed NaN into every pixel its rays touch.
    pub fn push(&mut self, center: Vec3, radius: f32) -> Result<(), RenderError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius(radius));
        }
        self.spheres.push(Sphere::new(center, radius));
        Ok(())
    }

    /// Get the number of spheres in the scene.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Remove all spheres from the scene.
    pub fn clear(&mut self) {
        self.spheres.clear();
    }
}

impl SceneQuery for SphereScene {
    fn intersect(&self, ray: &Ray, t_bounds: Interval, rec: &mut HitRecord) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = t_bounds.max;

        for sphere in &self.spheres {
            let bounds = Interval::new(t_bounds.min, closest_so_far);
            if sphere.hit(ray, bounds, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}

/// Reference shader: visualizes the surface normal as a color.
///
/// Maps each normal component from [-1, 1] into [0, 1]; alpha is 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalShader;

impl Shader for NormalShader {
    fn shade(&self, rec: &HitRecord) -> [f32; 4] {
        [
            rec.normal.x * 0.5 + 0.5,
            rec.normal.y * 0.5 + 0.5,
            rec.normal.z * 0.5 + 0.5,
            1.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_bounds() -> Interval {
        Interval::new(0.0, f32::INFINITY)
    }

    #[test]
    fn test_sphere_hit_dead_center() {
        let center = Vec3::new(0.0, 0.0, -5.0);
        let sphere = Sphere::new(center, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, forward_bounds(), &mut rec));

        // Near surface of the sphere: t = 4
        assert!((rec.t - 4.0).abs() < 1e-5);

        // Hit point lies at distance radius from the center
        assert!(((rec.point - center).length() - 1.0).abs() < 1e-5);

        // Normal is parallel to (hit - center) and unit length
        let outward = (rec.point - center).normalize();
        assert!((rec.normal - outward).length() < 1e-5);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, forward_bounds(), &mut rec));
    }

    #[test]
    fn test_sphere_far_root_when_inside() {
        // Ray origin inside the sphere: near root is behind the origin,
        // the far root is the one accepted
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, forward_bounds(), &mut rec));
        assert!((rec.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_nearest_hit() {
        let mut scene = SphereScene::new();
        scene.push(Vec3::new(0.0, 0.0, -10.0), 1.0).unwrap();
        scene.push(Vec3::new(0.0, 0.0, -4.0), 1.0).unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();
        assert!(scene.intersect(&ray, forward_bounds(), &mut rec));

        // The closer sphere wins: its near surface is at t = 3
        assert!((rec.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_nearest_hit_insertion_order_irrelevant() {
        let mut scene = SphereScene::new();
        scene.push(Vec3::new(0.0, 0.0, -4.0), 1.0).unwrap();
        scene.push(Vec3::new(0.0, 0.0, -10.0), 1.0).unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();
        assert!(scene.intersect(&ray, forward_bounds(), &mut rec));
        assert!((rec.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_miss_returns_false() {
        let mut scene = SphereScene::new();
        scene.push(Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let mut rec = HitRecord::default();
        assert!(!scene.intersect(&ray, forward_bounds(), &mut rec));
    }

    #[test]
    fn test_push_rejects_bad_radius() {
        let mut scene = SphereScene::new();
        assert_eq!(
            scene.push(Vec3::ZERO, 0.0),
            Err(RenderError::InvalidRadius(0.0))
        );
        assert_eq!(
            scene.push(Vec3::ZERO, -1.0),
            Err(RenderError::InvalidRadius(-1.0))
        );
        assert!(scene.push(Vec3::ZERO, f32::NAN).is_err());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_normal_shader() {
        let rec = HitRecord {
            point: Vec3::ZERO,
            normal: Vec3::new(0.0, 1.0, 0.0),
            t: 1.0,
        };
        let rgba = NormalShader.shade(&rec);
        assert_eq!(rgba, [0.5, 1.0, 0.5, 1.0]);
    }
}
