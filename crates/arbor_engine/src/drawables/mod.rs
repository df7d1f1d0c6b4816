//! Drawable objects submitted to the batch renderer
//!
//! The engine's drawable set is closed and known at design time, so it is
//! a tagged variant set with one dispatch function rather than a trait
//! object hierarchy - no virtual calls in the per-frame submission path.
//!
//! Every variant produces a (vertices, indices, model matrix) triple; the
//! batch renderer consumes the vertex container by move.

pub mod cube;
pub mod cylinder;
pub mod mesh;
pub mod world_reference;

pub use cube::Cube;
pub use cylinder::Cylinder;
pub use mesh::MeshDrawable;
pub use world_reference::WorldReference;

use crate::render::Renderer;

/// A drawable object: geometry plus a model transform.
#[derive(Debug, Clone)]
pub enum Drawable {
    /// Arbitrary vertex/index geometry
    Mesh(MeshDrawable),
    /// Axis-aligned unit cube
    Cube(Cube),
    /// Cylinder around an arbitrary axis
    Cylinder(Cylinder),
    /// A group of drawables submitted together
    Composite(Vec<Drawable>),
}

impl Drawable {
    /// Submit this drawable (and any children) to the open batch frame.
    pub fn push_to(&self, renderer: &mut Renderer) {
        match self {
            Self::Mesh(mesh) => {
                let (vertices, indices) = mesh.geometry();
                renderer.push_object(vertices, &indices, &mesh.model_matrix());
            }
            Self::Cube(cube) => {
                let (vertices, indices) = cube.geometry();
                renderer.push_object(vertices, &indices, &cube.model_matrix());
            }
            Self::Cylinder(cylinder) => {
                let (vertices, indices) = cylinder.geometry();
                renderer.push_object(vertices, &indices, &cylinder.model_matrix());
            }
            Self::Composite(children) => {
                for child in children {
                    child.push_to(renderer);
                }
            }
        }
    }
}
