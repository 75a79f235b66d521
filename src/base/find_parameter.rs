use super::{ConfigNode, Error, Parameter, Parameters, Result};

/// Finds the parameter named by a configuration key
///
/// Reads the string stored at `key`, looks up the parameter with that name, and
/// checks that it has exactly `n_components` components.
///
/// # Errors
///
/// * [crate::base::ConfigError::MissingKey] or [crate::base::ConfigError::WrongType] if `key` does not hold a string
/// * [Error::ParameterNotFound] if no parameter has the given name
/// * [Error::ParameterCardinality] if the number of components differs
pub fn find_parameter<'a>(
    config: &ConfigNode,
    key: &str,
    parameters: &'a Parameters,
    n_components: usize,
) -> Result<&'a Parameter> {
    let name = config.get_string(key)?;
    let parameter = parameters.find(name).ok_or_else(|| Error::ParameterNotFound {
        key: config.key_path(key),
        name: name.to_string(),
    })?;
    if parameter.n_components() != n_components {
        return Err(Error::ParameterCardinality {
            key: config.key_path(key),
            name: name.to_string(),
            expected: n_components,
            actual: parameter.n_components(),
        });
    }
    tracing::info!(key, parameter = name, "use parameter");
    Ok(parameter)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::find_parameter;
    use crate::base::{ConfigNode, Error, ErrorKind, Parameter, Parameters};
    use serde_json::json;

    fn sample_parameters() -> Parameters {
        let mut parameters = Parameters::new();
        parameters.add(Parameter::constant("G0", 100.0).unwrap()).unwrap();
        parameters
            .add(Parameter::constant_vector("k", &[1.0, 2.0, 3.0]).unwrap())
            .unwrap();
        parameters
    }

    #[test]
    fn find_parameter_works() {
        let parameters = sample_parameters();
        let data = json!({"shear_modulus": "G0", "conductivity": "k"});
        let config = ConfigNode::new(&data, "solid").unwrap();
        let p = find_parameter(&config, "shear_modulus", &parameters, 1).unwrap();
        assert_eq!(p.name(), "G0");
        assert!(std::ptr::eq(p, parameters.find("G0").unwrap()));
        let p = find_parameter(&config, "conductivity", &parameters, 3).unwrap();
        assert_eq!(p.n_components(), 3);
        assert_eq!(config.unused_keys().len(), 0);
    }

    #[test]
    fn find_parameter_captures_errors() {
        let parameters = sample_parameters();
        let data = json!({"shear_modulus": "G1", "conductivity": "k", "kappa": 0.1});
        let config = ConfigNode::new(&data, "solid").unwrap();

        let err = find_parameter(&config, "bulk_modulus", &parameters, 1).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            format!("{}", err),
            "configuration error: missing required key 'solid.bulk_modulus'"
        );

        let err = find_parameter(&config, "kappa", &parameters, 1).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = find_parameter(&config, "shear_modulus", &parameters, 1).err().unwrap();
        match err {
            Error::ParameterNotFound { key, name } => {
                assert_eq!(key, "solid.shear_modulus");
                assert_eq!(name, "G1");
            }
            _ => panic!("ParameterNotFound expected"),
        }

        let err = find_parameter(&config, "conductivity", &parameters, 1).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ParameterCardinality);
        assert_eq!(
            format!("{}", err),
            "parameter 'k' (requested by key 'solid.conductivity') has 3 components but 1 are required"
        );
    }
}
