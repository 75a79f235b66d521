use super::{create_ehlers, create_linear_elastic_isotropic};
use crate::base::{ConfigError, ConfigNode, Parameters, Result, TYPE_KEY};
use std::fmt;

/// Defines the available solid models
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Ehlers' single-surface elastoplastic model
    Ehlers,

    /// Isotropic linear elasticity
    LinearElasticIsotropic,
}

impl ModelKind {
    /// Holds all model kinds
    pub const ALL: [ModelKind; 2] = [ModelKind::Ehlers, ModelKind::LinearElasticIsotropic];

    /// Returns the type tag used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Ehlers => "Ehlers",
            ModelKind::LinearElasticIsotropic => "LinearElasticIsotropic",
        }
    }

    /// Returns the model kind corresponding to a type tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        ModelKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specifies the essential functions of solid models in a space of dimension `NDIM`
pub trait SolidModel<const NDIM: usize>: Send {
    /// Returns the kind of model
    fn kind(&self) -> ModelKind;

    /// Returns the number of internal values stored at each integration point
    fn n_internal_values(&self) -> usize;

    /// Returns the (configuration key, parameter name) of each material property
    fn bindings(&self) -> Vec<(&'static str, &str)>;

    /// Returns the (configuration key, value) of each scalar material property at position `x` and time `t`
    fn evaluate(&self, x: &[f64], t: f64) -> Vec<(&'static str, f64)>;
}

/// Returns the number of components of a symmetric second-order tensor in Kelvin notation
///
/// # Results
///
/// * `ndim = 2`: 4 (plane-strain and axisymmetric cases keep the out-of-plane component)
/// * `ndim = 3`: 6
pub fn kelvin_size(ndim: usize) -> usize {
    if ndim == 2 {
        4
    } else {
        6
    }
}

/// Returns an error if the space dimension is not 2 or 3
pub(crate) fn check_ndim(ndim: usize) -> Result<()> {
    if ndim != 2 && ndim != 3 {
        return Err(ConfigError::UnsupportedDimension { ndim }.into());
    }
    Ok(())
}

/// Allocates the solid model selected by the `type` tag of the configuration node
///
/// The returned model borrows its parameters from `parameters`.
pub fn create_solid_model<'a, const NDIM: usize>(
    parameters: &'a Parameters,
    config: &ConfigNode,
) -> Result<Box<dyn SolidModel<NDIM> + 'a>> {
    let tag = config.peek_string(TYPE_KEY)?;
    let kind = ModelKind::from_tag(tag).ok_or_else(|| ConfigError::UnknownModelType {
        path: config.key_path(TYPE_KEY),
        found: tag.to_string(),
    })?;
    let model: Box<dyn SolidModel<NDIM> + 'a> = match kind {
        ModelKind::Ehlers => Box::new(create_ehlers::<NDIM>(parameters, config)?),
        ModelKind::LinearElasticIsotropic => Box::new(create_linear_elastic_isotropic::<NDIM>(parameters, config)?),
    };
    Ok(model)
}

/// Allocates one solid model per configuration node
///
/// Stops at the first failure; no model is returned in that case.
pub fn create_solid_models<'a, const NDIM: usize>(
    parameters: &'a Parameters,
    configs: &[ConfigNode],
) -> Result<Vec<Box<dyn SolidModel<NDIM> + 'a>>> {
    configs
        .iter()
        .map(|config| create_solid_model::<NDIM>(parameters, config))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
