use super::{check_ndim, kelvin_size, parameter_bundle, ModelKind, SolidModel};
use crate::base::{ConfigNode, Parameters, Result};

parameter_bundle! {
    /// Holds the material properties of the Ehlers model
    ///
    /// The primed quantities (suffix `p`) define the plastic potential;
    /// the others define the yield surface.
    pub struct EhlersProperties {
        /// Shear modulus G
        shear_modulus: 1,

        /// Bulk modulus K
        bulk_modulus: 1,

        /// κ parameter
        kappa: 1,

        /// β parameter
        beta: 1,

        /// γ parameter
        gamma: 1,

        /// Hardening modulus
        hardening_modulus: 1,

        /// α parameter
        alpha: 1,

        /// δ parameter
        delta: 1,

        /// ε parameter
        eps: 1,

        /// m parameter
        m: 1,

        /// α parameter of the plastic potential
        alphap: 1,

        /// δ parameter of the plastic potential
        deltap: 1,

        /// ε parameter of the plastic potential
        epsp: 1,

        /// m parameter of the plastic potential
        mp: 1,

        /// β parameter of the plastic potential
        betap: 1,

        /// γ parameter of the plastic potential
        gammap: 1,
    }
}

/// Holds the values of the Ehlers material properties at a point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EhlersValues {
    pub shear_modulus: f64,
    pub bulk_modulus: f64,
    pub kappa: f64,
    pub beta: f64,
    pub gamma: f64,
    pub hardening_modulus: f64,
    pub alpha: f64,
    pub delta: f64,
    pub eps: f64,
    pub m: f64,
    pub alphap: f64,
    pub deltap: f64,
    pub epsp: f64,
    pub mp: f64,
    pub betap: f64,
    pub gammap: f64,
}

/// Implements Ehlers' single-surface elastoplastic model
///
/// Only the construction is implemented here; the stress update belongs to the
/// solver that consumes the model.
pub struct Ehlers<'a, const NDIM: usize> {
    properties: EhlersProperties<'a>,
}

impl<'a, const NDIM: usize> Ehlers<'a, NDIM> {
    /// Allocates a new instance
    pub fn new(properties: EhlersProperties<'a>) -> Self {
        Ehlers { properties }
    }

    /// Returns the material properties
    pub fn properties(&self) -> &EhlersProperties<'a> {
        &self.properties
    }

    /// Evaluates the material properties at position `x` and time `t`
    pub fn material_values(&self, x: &[f64], t: f64) -> EhlersValues {
        let p = &self.properties;
        EhlersValues {
            shear_modulus: p.shear_modulus.scalar(x, t),
            bulk_modulus: p.bulk_modulus.scalar(x, t),
            kappa: p.kappa.scalar(x, t),
            beta: p.beta.scalar(x, t),
            gamma: p.gamma.scalar(x, t),
            hardening_modulus: p.hardening_modulus.scalar(x, t),
            alpha: p.alpha.scalar(x, t),
            delta: p.delta.scalar(x, t),
            eps: p.eps.scalar(x, t),
            m: p.m.scalar(x, t),
            alphap: p.alphap.scalar(x, t),
            deltap: p.deltap.scalar(x, t),
            epsp: p.epsp.scalar(x, t),
            mp: p.mp.scalar(x, t),
            betap: p.betap.scalar(x, t),
            gammap: p.gammap.scalar(x, t),
        }
    }
}

impl<'a, const NDIM: usize> SolidModel<NDIM> for Ehlers<'a, NDIM> {
    fn kind(&self) -> ModelKind {
        ModelKind::Ehlers
    }

    /// Returns the plastic strain (Kelvin components), the volumetric plastic strain,
    /// and the equivalent plastic strain
    fn n_internal_values(&self) -> usize {
        kelvin_size(NDIM) + 2
    }

    fn bindings(&self) -> Vec<(&'static str, &str)> {
        self.properties.bindings()
    }

    fn evaluate(&self, x: &[f64], t: f64) -> Vec<(&'static str, f64)> {
        self.properties.evaluate(x, t)
    }
}

/// Allocates an Ehlers model from a configuration node with `type = "Ehlers"`
///
/// Each property key of [EhlersProperties] must name a scalar parameter in `parameters`.
pub fn create_ehlers<'a, const NDIM: usize>(parameters: &'a Parameters, config: &ConfigNode) -> Result<Ehlers<'a, NDIM>> {
    config.check_tag(ModelKind::Ehlers.as_str())?;
    tracing::info!(path = config.path(), "create Ehlers material");
    check_ndim(NDIM)?;
    let properties = EhlersProperties::resolve(config, parameters)?;
    Ok(Ehlers::new(properties))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
