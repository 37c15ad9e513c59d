//! Extracts named triangle meshes from `.3ds` scene files.
//!
//! A scene is a tree of length-prefixed chunks. Only the chunks on the path down to mesh data are
//! walked (main, 3D editor, object block, triangular mesh) and only vertex and face lists are
//! decoded; everything else is skipped by its declared length.
//!
//! ```no_run
//! use mesh3ds::Scene;
//!
//! let scene = Scene::open("Car.3DS")?;
//! for object in &scene {
//!     println!("{}: {} triangles", object.name(), object.triangle_count());
//! }
//! # Ok::<(), mesh3ds::DecodeError>(())
//! ```

pub mod chunk;

mod config;
mod error;
mod mesh;
mod scene;
mod stream;

pub use self::{
    config::{is_toml, Config, DecodeOptions, ObjectBoundary, SceneConfig},
    error::{DecodeError, DecodeResult},
    mesh::{FaceFlags, MeshObject, Triangle},
    scene::Scene,
    stream::{stream_len, SceneFile, Stream},
};
