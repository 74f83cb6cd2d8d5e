pub mod constraint;
pub mod controller_message;
pub mod cworld;
pub mod error;
pub mod geom;
pub mod grid;
pub mod integrator;
pub mod particle;
pub mod solver;
pub mod tear;
pub mod topology;

pub type V2 = nalgebra::Vector2<f32>;
