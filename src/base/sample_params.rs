use super::{Parameter, Parameters};
use serde_json::{json, Value};

/// Holds samples of parameters and configuration data
pub struct SampleParams {}

impl SampleParams {
    /// Returns the names of the Ehlers parameters
    ///
    /// The configuration returned by [SampleParams::config_ehlers] maps each key to the parameter with the same name.
    pub const EHLERS_NAMES: [&'static str; 16] = [
        "shear_modulus",
        "bulk_modulus",
        "kappa",
        "beta",
        "gamma",
        "hardening_modulus",
        "alpha",
        "delta",
        "eps",
        "m",
        "alphap",
        "deltap",
        "epsp",
        "mp",
        "betap",
        "gammap",
    ];

    /// Returns sample parameters for the Ehlers model (dense sand; kPa)
    pub fn parameters_ehlers() -> Parameters {
        let values = [
            150e3, // shear_modulus
            200e3, // bulk_modulus
            0.0,   // kappa
            0.1,   // beta
            0.0,   // gamma
            0.0,   // hardening_modulus
            0.01,  // alpha
            0.0,   // delta
            1e-4,  // eps
            4.0,   // m
            0.01,  // alphap
            0.0,   // deltap
            1e-4,  // epsp
            4.0,   // mp
            0.1,   // betap
            0.0,   // gammap
        ];
        let mut parameters = Parameters::new();
        for (name, value) in SampleParams::EHLERS_NAMES.iter().zip(values) {
            parameters.add(Parameter::constant(name, value).unwrap()).unwrap();
        }
        parameters
    }

    /// Returns the configuration of an Ehlers model using [SampleParams::parameters_ehlers]
    pub fn config_ehlers() -> Value {
        let mut config = json!({"type": "Ehlers"});
        for name in SampleParams::EHLERS_NAMES {
            config[name] = name.into();
        }
        config
    }

    /// Returns sample parameters for the linear elastic model
    pub fn parameters_linear_elastic() -> Parameters {
        let mut parameters = Parameters::new();
        parameters.add(Parameter::constant("E", 1500.0).unwrap()).unwrap();
        parameters.add(Parameter::constant("nu", 0.25).unwrap()).unwrap();
        parameters
    }

    /// Returns the configuration of a linear elastic model using [SampleParams::parameters_linear_elastic]
    pub fn config_linear_elastic() -> Value {
        json!({
            "type": "LinearElasticIsotropic",
            "youngs_modulus": "E",
            "poissons_ratio": "nu",
        })
    }

    /// Returns the union of the Ehlers and linear elastic parameters
    pub fn parameters_ehlers_and_linear_elastic() -> Parameters {
        let mut parameters = SampleParams::parameters_ehlers();
        for p in &SampleParams::parameters_linear_elastic() {
            parameters.add(p.clone()).unwrap();
        }
        parameters
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleParams;

    #[test]
    fn sample_params_work() {
        let parameters = SampleParams::parameters_ehlers();
        assert_eq!(parameters.len(), 16);
        let config = SampleParams::config_ehlers();
        assert_eq!(config.as_object().unwrap().len(), 17);
        assert_eq!(config["mp"], "mp");
        let parameters = SampleParams::parameters_ehlers_and_linear_elastic();
        assert_eq!(parameters.len(), 18);
    }
}
