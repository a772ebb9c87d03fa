#![warn(missing_docs)]

//! Surfaces and ray intersection for the lumen ray tracer.
//!
//! This crate provides the geometric half of the renderer: the [`Ray`]
//! type (including the bias-offset constructor used for shadow and
//! secondary rays), the closed set of surface shapes with exact
//! ray-intersection routines, surface [`Material`] coefficients, and the
//! flat [`Geometries`] aggregate the shading engine queries.
//!
//! # Architecture
//!
//! - [`Ray`] - origin plus unit direction, parametrized by `t >= 0`
//! - [`Shape`] - sum type over Plane, Sphere, Triangle, Polygon, Tube,
//!   Cylinder, each with a dedicated intersection module
//! - [`Primitive`] - a shape paired with its emission color and material
//! - [`Hit`] - an intersection point tied to the primitive it lies on
//! - [`Geometries`] - linear aggregate of primitives (no acceleration
//!   structure; the scene scale keeps brute force acceptable)

mod aggregate;
mod error;
mod material;
mod ray;
pub mod shape;

pub use aggregate::{Geometries, Hit, Primitive};
pub use error::{GeometryError, Result};
pub use material::Material;
pub use ray::Ray;
pub use shape::{Cylinder, Plane, Polygon, Shape, Sphere, Triangle, Tube};
