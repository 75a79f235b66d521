//! Implements the solid models and their factories

mod bundle;
mod ehlers;
mod linear_elastic;
mod solid_model;
pub(crate) use crate::material::bundle::parameter_bundle;
pub use crate::material::bundle::Role;
pub use crate::material::ehlers::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::solid_model::*;
