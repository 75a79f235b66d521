//! Makes available common structures needed to build solid models
//!
//! You may write `use solidlib::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{find_parameter, ConfigNode, Error, ErrorKind, Parameter, ParameterSource, Parameters};
pub use crate::base::{ConfigError, SolidsInput};
pub use crate::material::{create_ehlers, create_linear_elastic_isotropic, create_solid_model};
pub use crate::material::{Ehlers, EhlersProperties, LinearElasticIsotropic, LinearElasticProperties};
pub use crate::material::{ModelKind, SolidModel};
pub use crate::FnSpaceTime;
