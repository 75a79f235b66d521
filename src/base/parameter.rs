use super::{Error, Result};
use crate::FnSpaceTime;

/// Defines how the values of a parameter are obtained
#[derive(Clone, Debug)]
pub enum ParameterSource {
    /// Constant values (one per component)
    Constant(Vec<f64>),

    /// Scalar piecewise-linear function of time
    ///
    /// The value is clamped to the first (last) entry before (after) the table
    /// and is NaN if the time is NaN.
    Curve {
        /// Strictly increasing times
        times: Vec<f64>,

        /// Values at each time
        values: Vec<f64>,
    },

    /// Functions of space and time (one per component)
    Function(Vec<FnSpaceTime>),
}

/// Holds a named parameter that may vary in space and time
#[derive(Clone, Debug)]
pub struct Parameter {
    name: String,
    source: ParameterSource,
}

impl Parameter {
    /// Allocates a new instance after validating the source
    pub fn new(name: &str, source: ParameterSource) -> Result<Self> {
        let invalid = |reason: &'static str| -> Result<Self> {
            Err(Error::InvalidParameter {
                name: name.to_string(),
                reason,
            })
        };
        if name.is_empty() {
            return invalid("the name must not be empty");
        }
        match &source {
            ParameterSource::Constant(values) => {
                if values.is_empty() {
                    return invalid("at least one component is required");
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return invalid("values must be finite");
                }
            }
            ParameterSource::Curve { times, values } => {
                if times.is_empty() {
                    return invalid("the curve must have at least one point");
                }
                if times.len() != values.len() {
                    return invalid("the curve must have as many times as values");
                }
                if times.iter().chain(values.iter()).any(|v| !v.is_finite()) {
                    return invalid("values must be finite");
                }
                if times.windows(2).any(|w| w[1] <= w[0]) {
                    return invalid("curve times must be strictly increasing");
                }
            }
            ParameterSource::Function(functions) => {
                if functions.is_empty() {
                    return invalid("at least one component is required");
                }
            }
        }
        Ok(Parameter {
            name: name.to_string(),
            source,
        })
    }

    /// Allocates a constant scalar parameter
    pub fn constant(name: &str, value: f64) -> Result<Self> {
        Parameter::new(name, ParameterSource::Constant(vec![value]))
    }

    /// Allocates a constant parameter with several components
    pub fn constant_vector(name: &str, values: &[f64]) -> Result<Self> {
        Parameter::new(name, ParameterSource::Constant(values.to_vec()))
    }

    /// Allocates a scalar piecewise-linear function of time
    pub fn curve(name: &str, times: &[f64], values: &[f64]) -> Result<Self> {
        Parameter::new(
            name,
            ParameterSource::Curve {
                times: times.to_vec(),
                values: values.to_vec(),
            },
        )
    }

    /// Allocates a scalar function of space and time
    pub fn function(name: &str, f: FnSpaceTime) -> Result<Self> {
        Parameter::new(name, ParameterSource::Function(vec![f]))
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source of values
    pub fn source(&self) -> &ParameterSource {
        &self.source
    }

    /// Returns the number of scalar components
    pub fn n_components(&self) -> usize {
        match &self.source {
            ParameterSource::Constant(values) => values.len(),
            ParameterSource::Curve { .. } => 1,
            ParameterSource::Function(functions) => functions.len(),
        }
    }

    /// Evaluates all components at position `x` and time `t`
    pub fn values(&self, x: &[f64], t: f64) -> Vec<f64> {
        match &self.source {
            ParameterSource::Constant(values) => values.clone(),
            ParameterSource::Curve { times, values } => vec![interpolate(times, values, t)],
            ParameterSource::Function(functions) => functions.iter().map(|f| f(x, t)).collect(),
        }
    }

    /// Evaluates the first component at position `x` and time `t`
    ///
    /// Scalar roles are validated to have one component when a model is built,
    /// thus this is the value of the parameter in those cases.
    pub fn scalar(&self, x: &[f64], t: f64) -> f64 {
        match &self.source {
            ParameterSource::Constant(values) => values[0],
            ParameterSource::Curve { times, values } => interpolate(times, values, t),
            ParameterSource::Function(functions) => (functions[0])(x, t),
        }
    }
}

/// Computes the piecewise-linear interpolation with clamped ends
fn interpolate(times: &[f64], values: &[f64], t: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    let n = times.len();
    if t <= times[0] {
        return values[0];
    }
    if t >= times[n - 1] {
        return values[n - 1];
    }
    let i = times.partition_point(|&ti| ti <= t); // times[i-1] ≤ t < times[i]
    let (t0, t1) = (times[i - 1], times[i]);
    let (v0, v1) = (values[i - 1], values[i]);
    v0 + (v1 - v0) * (t - t0) / (t1 - t0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Parameter, ParameterSource};
    use crate::FnSpaceTime;

    #[test]
    fn new_captures_errors() {
        let cases = [
            ("", ParameterSource::Constant(vec![1.0]), "the name must not be empty"),
            ("a", ParameterSource::Constant(vec![]), "at least one component is required"),
            ("a", ParameterSource::Constant(vec![f64::NAN]), "values must be finite"),
            ("a", ParameterSource::Function(vec![]), "at least one component is required"),
            (
                "a",
                ParameterSource::Curve {
                    times: vec![],
                    values: vec![],
                },
                "the curve must have at least one point",
            ),
            (
                "a",
                ParameterSource::Curve {
                    times: vec![0.0, 1.0],
                    values: vec![0.0],
                },
                "the curve must have as many times as values",
            ),
            (
                "a",
                ParameterSource::Curve {
                    times: vec![0.0, 0.0],
                    values: vec![1.0, 2.0],
                },
                "curve times must be strictly increasing",
            ),
        ];
        for (name, source, reason) in cases {
            let err = Parameter::new(name, source).err().unwrap();
            assert_eq!(format!("{}", err), format!("parameter '{}' is invalid: {}", name, reason));
        }

        fn zero(_: &[f64], _: f64) -> f64 {
            0.0
        }
        let scalar_cases = [
            (Parameter::constant("", 1.0), "parameter '' is invalid: the name must not be empty"),
            (Parameter::constant("a", f64::NAN), "parameter 'a' is invalid: values must be finite"),
            (
                Parameter::constant("a", f64::INFINITY),
                "parameter 'a' is invalid: values must be finite",
            ),
            (Parameter::function("", zero), "parameter '' is invalid: the name must not be empty"),
        ];
        for (res, msg) in scalar_cases {
            assert_eq!(format!("{}", res.err().unwrap()), msg);
        }
    }

    #[test]
    fn constant_works() {
        let p = Parameter::constant("E", 1500.0).unwrap();
        assert_eq!(p.name(), "E");
        assert_eq!(p.n_components(), 1);
        assert_eq!(p.scalar(&[], 0.0), 1500.0);
        assert_eq!(p.values(&[1.0, 2.0], 10.0), &[1500.0]);

        let p = Parameter::constant_vector("k", &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p.n_components(), 3);
        assert_eq!(p.values(&[], 0.0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn curve_works() {
        let p = Parameter::curve("load", &[0.0, 1.0, 3.0], &[0.0, 10.0, 20.0]).unwrap();
        assert_eq!(p.n_components(), 1);
        assert_eq!(p.scalar(&[], -1.0), 0.0);
        assert_eq!(p.scalar(&[], 0.0), 0.0);
        assert_eq!(p.scalar(&[], 0.5), 5.0);
        assert_eq!(p.scalar(&[], 1.0), 10.0);
        assert_eq!(p.scalar(&[], 2.0), 15.0);
        assert_eq!(p.scalar(&[], 3.0), 20.0);
        assert_eq!(p.scalar(&[], 4.0), 20.0);

        let p = Parameter::curve("single", &[1.0], &[7.0]).unwrap();
        assert_eq!(p.scalar(&[], 0.0), 7.0);
        assert_eq!(p.scalar(&[], 2.0), 7.0);
    }

    #[test]
    fn curve_handles_nan_time() {
        let p = Parameter::curve("load", &[0.0, 1.0], &[0.0, 10.0]).unwrap();
        assert!(p.scalar(&[], f64::NAN).is_nan());
        assert!(p.values(&[], f64::NAN)[0].is_nan());
        assert_eq!(p.scalar(&[], f64::INFINITY), 10.0);
        assert_eq!(p.scalar(&[], f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn function_works() {
        let p = Parameter::function("depth", |x, t| -10.0 * x[1] + t).unwrap();
        assert_eq!(p.n_components(), 1);
        assert_eq!(p.scalar(&[0.0, -2.0], 1.0), 21.0);
        assert_eq!(p.values(&[0.0, -2.0], 0.0), &[20.0]);

        fn one(_: &[f64], _: f64) -> f64 {
            1.0
        }
        fn first(x: &[f64], _: f64) -> f64 {
            x[0]
        }
        let functions = vec![one as FnSpaceTime, first as FnSpaceTime];
        let p = Parameter::new("two", ParameterSource::Function(functions)).unwrap();
        assert_eq!(p.n_components(), 2);
        assert_eq!(p.values(&[3.0], 0.0), &[1.0, 3.0]);
    }
}
