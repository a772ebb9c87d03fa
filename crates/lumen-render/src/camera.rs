//! Camera, its validating builder, and the rendering loop.

use std::fmt;
use std::sync::Arc;
use std::thread;

use rand::Rng;
use serde::{Deserialize, Serialize};

use lumen_geometry::Ray;
use lumen_math::{self as math, Color, Dir3, Point3};

use crate::error::{RenderError, Result};
use crate::pixels::PixelManager;
use crate::sink::PixelSink;
use crate::tracer::RayTracer;

/// Cores left unused when sizing the pool automatically.
const SPARE_THREADS: usize = 2;

/// How rendering work is distributed across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThreadPolicy {
    /// Single-threaded raster iteration.
    #[default]
    Sequential,
    /// A fixed pool of worker threads; `Fixed(0)` is sequential.
    Fixed(usize),
    /// Size the pool from available hardware parallelism, keeping
    /// [`SPARE_THREADS`] cores free (never fewer than one worker).
    Auto,
}

impl ThreadPolicy {
    /// Number of pool workers; zero means render sequentially.
    fn workers(self) -> usize {
        match self {
            Self::Sequential => 0,
            Self::Fixed(n) => n,
            Self::Auto => thread::available_parallelism()
                .map(|n| n.get().saturating_sub(SPARE_THREADS))
                .unwrap_or(1)
                .max(1),
        }
    }
}

/// A render-ready camera.
///
/// Owns the view geometry, the shading engine, and the pixel sink.
/// Instances only come out of [`Camera::builder`], which validates every
/// field; once built, a camera is immutable and rendering cannot fail.
pub struct Camera {
    location: Point3,
    to: Dir3,
    up: Dir3,
    right: Dir3,
    width: f64,
    height: f64,
    distance: f64,
    threads: ThreadPolicy,
    samples: usize,
    tracer: RayTracer,
    sink: Arc<dyn PixelSink>,
}

impl Camera {
    /// Start building a camera.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    /// The camera's location.
    pub fn location(&self) -> Point3 {
        self.location
    }

    /// The ray from the camera through the center of pixel `(j, i)` on
    /// an `nx` x `ny` view grid (`j` = column, `i` = row).
    pub fn construct_ray(&self, nx: usize, ny: usize, j: usize, i: usize) -> Ray {
        self.ray_through(nx, ny, j, i, (0.0, 0.0))
    }

    /// Like [`Self::construct_ray`] but with a sub-pixel jitter drawn
    /// from `rng`, for anti-aliasing.
    fn construct_jittered_ray(
        &self,
        nx: usize,
        ny: usize,
        j: usize,
        i: usize,
        rng: &mut impl Rng,
    ) -> Ray {
        let jitter = (rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5);
        self.ray_through(nx, ny, j, i, jitter)
    }

    fn ray_through(&self, nx: usize, ny: usize, j: usize, i: usize, (dx, dy): (f64, f64)) -> Ray {
        let rx = self.width / nx as f64;
        let ry = self.height / ny as f64;

        // Center of the view rectangle.
        let mut pij = self.location + self.distance * self.to.as_ref();

        let xj = (j as f64 - (nx as f64 - 1.0) / 2.0 + dx) * rx;
        let yi = -(i as f64 - (ny as f64 - 1.0) / 2.0 + dy) * ry;
        if !math::is_zero(xj) {
            pij += xj * self.right.as_ref();
        }
        if !math::is_zero(yi) {
            pij += yi * self.up.as_ref();
        }

        // pij sits at least `distance` away from the location, so the
        // direction is never degenerate.
        Ray::new(self.location, Dir3::new_normalize(pij - self.location))
    }

    /// Render every pixel of the sink's image.
    ///
    /// The thread policy only changes scheduling: pixels are independent,
    /// so without anti-aliasing the output is identical for any worker
    /// count and processing order.
    pub fn render_image(&self) -> &Self {
        let (nx, ny) = self.sink.dimensions();
        match self.threads.workers() {
            0 => {
                let mut rng = rand::rng();
                for i in 0..ny {
                    for j in 0..nx {
                        self.cast_ray(nx, ny, j, i, &mut rng);
                    }
                }
            }
            workers => {
                let manager = PixelManager::new(ny, nx);
                thread::scope(|scope| {
                    for _ in 0..workers {
                        scope.spawn(|| {
                            let mut rng = rand::rng();
                            while let Some(pixel) = manager.next_pixel() {
                                self.cast_ray(nx, ny, pixel.col, pixel.row, &mut rng);
                                manager.pixel_done();
                            }
                        });
                    }
                });
            }
        }
        self
    }

    /// Trace the sample(s) for one pixel and write the result.
    fn cast_ray(&self, nx: usize, ny: usize, j: usize, i: usize, rng: &mut impl Rng) {
        let color = if self.samples == 1 {
            self.tracer.trace_ray(&self.construct_ray(nx, ny, j, i))
        } else {
            let mut sum = Color::BLACK;
            for _ in 0..self.samples {
                let ray = self.construct_jittered_ray(nx, ny, j, i, rng);
                sum = sum.add(self.tracer.trace_ray(&ray));
            }
            sum.scale(1.0 / self.samples as f64)
        };
        self.sink.write_pixel(j, i, color);
    }

    /// Overlay a grid every `interval` pixels, for debugging placement.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn print_grid(&self, interval: usize, color: Color) -> &Self {
        let (nx, ny) = self.sink.dimensions();
        for i in 0..ny {
            for j in 0..nx {
                if i % interval == 0 || j % interval == 0 {
                    self.sink.write_pixel(j, i, color);
                }
            }
        }
        self
    }

    /// Finalize the sink (for file-backed sinks, write the image out).
    pub fn flush(&self) -> std::io::Result<()> {
        self.sink.flush()
    }
}

// The tracer and the sink trait object have no useful Debug form.
impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("location", &self.location)
            .field("to", &self.to)
            .field("up", &self.up)
            .field("right", &self.right)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("distance", &self.distance)
            .field("threads", &self.threads)
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

/// Staged builder for [`Camera`].
///
/// Accumulates configuration, then `build()` validates all of it at
/// once. The builder is consumed by `build()`, so a built camera can
/// never be affected by later configuration.
#[derive(Default)]
pub struct CameraBuilder {
    location: Option<Point3>,
    direction: Option<(Dir3, Dir3)>,
    viewport: Option<(f64, f64)>,
    distance: Option<f64>,
    threads: ThreadPolicy,
    samples: usize,
    tracer: Option<RayTracer>,
    sink: Option<Arc<dyn PixelSink>>,
}

impl CameraBuilder {
    /// Set the camera location.
    pub fn location(mut self, location: Point3) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the forward and up directions; they must be orthogonal.
    pub fn direction(mut self, to: Dir3, up: Dir3) -> Self {
        self.direction = Some((to, up));
        self
    }

    /// Set the viewport width and height.
    pub fn viewport_size(mut self, width: f64, height: f64) -> Self {
        self.viewport = Some((width, height));
        self
    }

    /// Set the distance from the camera to the viewport.
    pub fn viewport_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Set the thread policy (defaults to sequential).
    pub fn threads(mut self, threads: ThreadPolicy) -> Self {
        self.threads = threads;
        self
    }

    /// Set the anti-aliasing sample count; 1 disables anti-aliasing.
    pub fn antialiasing(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Attach the shading engine.
    pub fn tracer(mut self, tracer: RayTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Attach the pixel sink.
    pub fn sink(mut self, sink: Arc<dyn PixelSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the configuration and produce a camera.
    pub fn build(self) -> Result<Camera> {
        let location = self.location.ok_or(RenderError::MissingLocation)?;

        let (to, up) = self.direction.ok_or(RenderError::MissingDirection)?;
        if !math::is_zero(to.dot(&up)) {
            return Err(RenderError::NonOrthogonalDirection);
        }
        let right = Dir3::new_normalize(to.cross(&up));

        let (width, height) = self.viewport.ok_or(RenderError::InvalidViewportSize)?;
        if width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidViewportSize);
        }

        let distance = self.distance.ok_or(RenderError::InvalidViewportDistance)?;
        if distance <= 0.0 {
            return Err(RenderError::InvalidViewportDistance);
        }

        let samples = if self.samples == 0 { 1 } else { self.samples };

        Ok(Camera {
            location,
            to,
            up,
            right,
            width,
            height,
            distance,
            threads: self.threads,
            samples,
            tracer: self.tracer.ok_or(RenderError::MissingTracer)?,
            sink: self.sink.ok_or(RenderError::MissingSink)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ImageWriter;
    use lumen_math::Vec3;
    use lumen_scene::Scene;

    fn test_tracer() -> RayTracer {
        RayTracer::new(Scene::new("test"))
    }

    fn base_builder() -> CameraBuilder {
        Camera::builder()
            .location(Point3::origin())
            .direction(
                math::unit(Vec3::new(0.0, 0.0, -1.0)).unwrap(),
                math::unit(Vec3::new(0.0, 1.0, 0.0)).unwrap(),
            )
            .viewport_size(6.0, 6.0)
            .viewport_distance(10.0)
            .tracer(test_tracer())
            .sink(Arc::new(ImageWriter::new(3, 3)))
    }

    #[test]
    fn test_build_succeeds_when_complete() {
        assert!(base_builder().build().is_ok());
    }

    #[test]
    fn test_build_fails_on_missing_fields() {
        let missing_location = Camera::builder()
            .direction(
                math::unit(Vec3::new(0.0, 0.0, -1.0)).unwrap(),
                math::unit(Vec3::new(0.0, 1.0, 0.0)).unwrap(),
            )
            .viewport_size(6.0, 6.0)
            .viewport_distance(10.0)
            .tracer(test_tracer())
            .sink(Arc::new(ImageWriter::new(3, 3)))
            .build();
        assert_eq!(missing_location.unwrap_err(), RenderError::MissingLocation);

        let missing_tracer = Camera::builder()
            .location(Point3::origin())
            .direction(
                math::unit(Vec3::new(0.0, 0.0, -1.0)).unwrap(),
                math::unit(Vec3::new(0.0, 1.0, 0.0)).unwrap(),
            )
            .viewport_size(6.0, 6.0)
            .viewport_distance(10.0)
            .sink(Arc::new(ImageWriter::new(3, 3)))
            .build();
        assert_eq!(missing_tracer.unwrap_err(), RenderError::MissingTracer);
    }

    #[test]
    fn test_build_rejects_non_orthogonal_directions() {
        let result = base_builder()
            .direction(
                math::unit(Vec3::new(0.0, 0.0, -1.0)).unwrap(),
                math::unit(Vec3::new(0.0, 1.0, -1.0)).unwrap(),
            )
            .build();
        assert_eq!(result.unwrap_err(), RenderError::NonOrthogonalDirection);
    }

    #[test]
    fn test_build_rejects_bad_viewport() {
        let result = base_builder().viewport_size(-1.0, 6.0).build();
        assert_eq!(result.unwrap_err(), RenderError::InvalidViewportSize);

        let result = base_builder().viewport_distance(0.0).build();
        assert_eq!(result.unwrap_err(), RenderError::InvalidViewportDistance);
    }

    #[test]
    fn test_center_pixel_ray_is_forward() {
        let camera = base_builder().build().unwrap();
        let ray = camera.construct_ray(3, 3, 1, 1);
        assert!((ray.direction.as_ref() - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
        assert_eq!(ray.origin, Point3::origin());
    }

    #[test]
    fn test_corner_pixel_ray_offsets() {
        let camera = base_builder().build().unwrap();
        // Pixel (0, 0): left column, top row. Pixel size is 2x2, so the
        // offset is one pixel (2 units) left and up from center.
        let ray = camera.construct_ray(3, 3, 0, 0);
        // right = to x up = (0,0,-1) x (0,1,0) = (1,0,0); offset -2 along
        // right, +2 along up, 10 forward.
        let expected = Vec3::new(-2.0, 2.0, -10.0).normalize();
        assert!((ray.direction.as_ref() - expected).norm() < 1e-12);
    }

    #[test]
    fn test_debug_skips_collaborators() {
        let camera = base_builder().build().unwrap();
        let debug = format!("{camera:?}");
        assert!(debug.starts_with("Camera"));
        assert!(debug.contains("location"));
        // The tracer and sink are elided.
        assert!(!debug.contains("tracer"));
        assert!(!debug.contains("sink"));
    }

    #[test]
    #[should_panic]
    fn test_print_grid_zero_interval_panics() {
        let camera = base_builder().build().unwrap();
        camera.print_grid(0, Color::BLACK);
    }

    #[test]
    fn test_auto_policy_reserves_spare_threads() {
        let workers = ThreadPolicy::Auto.workers();
        assert!(workers >= 1);
        if let Ok(n) = thread::available_parallelism() {
            assert!(workers <= n.get());
        }
    }

    #[test]
    fn test_fixed_zero_is_sequential() {
        assert_eq!(ThreadPolicy::Fixed(0).workers(), 0);
        assert_eq!(ThreadPolicy::Sequential.workers(), 0);
    }
}
