use super::{check_ndim, parameter_bundle, ModelKind, SolidModel};
use crate::base::{ConfigNode, Parameters, Result};

parameter_bundle! {
    /// Holds the material properties of the isotropic linear elastic model
    pub struct LinearElasticProperties {
        /// Young's modulus E
        youngs_modulus: 1,

        /// Poisson's coefficient ν
        poissons_ratio: 1,
    }
}

/// Holds the elastic constants at a point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearElasticValues {
    /// Young's modulus E
    pub young: f64,

    /// Poisson's coefficient ν
    pub poisson: f64,

    /// Shear modulus G = E / (2 (1 + ν))
    pub shear: f64,

    /// Bulk modulus K = E / (3 (1 - 2 ν))
    pub bulk: f64,
}

/// Implements an isotropic linear elastic model
pub struct LinearElasticIsotropic<'a, const NDIM: usize> {
    properties: LinearElasticProperties<'a>,
}

impl<'a, const NDIM: usize> LinearElasticIsotropic<'a, NDIM> {
    /// Allocates a new instance
    pub fn new(properties: LinearElasticProperties<'a>) -> Self {
        LinearElasticIsotropic { properties }
    }

    /// Returns the material properties
    pub fn properties(&self) -> &LinearElasticProperties<'a> {
        &self.properties
    }

    /// Evaluates the elastic constants at position `x` and time `t`
    pub fn material_values(&self, x: &[f64], t: f64) -> LinearElasticValues {
        let young = self.properties.youngs_modulus.scalar(x, t);
        let poisson = self.properties.poissons_ratio.scalar(x, t);
        LinearElasticValues {
            young,
            poisson,
            shear: young / (2.0 * (1.0 + poisson)),
            bulk: young / (3.0 * (1.0 - 2.0 * poisson)),
        }
    }
}

impl<'a, const NDIM: usize> SolidModel<NDIM> for LinearElasticIsotropic<'a, NDIM> {
    fn kind(&self) -> ModelKind {
        ModelKind::LinearElasticIsotropic
    }

    fn n_internal_values(&self) -> usize {
        0
    }

    fn bindings(&self) -> Vec<(&'static str, &str)> {
        self.properties.bindings()
    }

    fn evaluate(&self, x: &[f64], t: f64) -> Vec<(&'static str, f64)> {
        self.properties.evaluate(x, t)
    }
}

/// Allocates a linear elastic model from a configuration node with `type = "LinearElasticIsotropic"`
pub fn create_linear_elastic_isotropic<'a, const NDIM: usize>(
    parameters: &'a Parameters,
    config: &ConfigNode,
) -> Result<LinearElasticIsotropic<'a, NDIM>> {
    config.check_tag(ModelKind::LinearElasticIsotropic.as_str())?;
    tracing::info!(path = config.path(), "create linear elastic isotropic material");
    check_ndim(NDIM)?;
    let properties = LinearElasticProperties::resolve(config, parameters)?;
    Ok(LinearElasticIsotropic::new(properties))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
