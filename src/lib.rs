//! Solidlib builds solid constitutive models from configuration data
//!
//! A configuration node names, for every material property of a model, one entry
//! of a registry of (constant or field-varying) parameters. The factories in
//! [material] resolve those names against [base::Parameters], validate the number
//! of components of each parameter, and return the model behind the
//! [material::SolidModel] trait.
//!
//! ```
//! use solidlib::prelude::*;
//! use serde_json::json;
//!
//! let mut parameters = Parameters::new();
//! parameters.add(Parameter::constant("E", 1500.0).unwrap()).unwrap();
//! parameters.add(Parameter::constant("nu", 0.25).unwrap()).unwrap();
//!
//! let data = json!({
//!     "type": "LinearElasticIsotropic",
//!     "youngs_modulus": "E",
//!     "poissons_ratio": "nu",
//! });
//! let config = ConfigNode::new(&data, "solid").unwrap();
//! let model = create_solid_model::<2>(&parameters, &config).unwrap();
//! assert_eq!(model.kind(), ModelKind::LinearElasticIsotropic);
//! ```

/// Defines a function of (x,t) where x is space and t is time
pub type FnSpaceTime = fn(&[f64], f64) -> f64;

pub mod base;
pub mod material;
pub mod prelude;
