/// Holds the configuration key and the required number of components of one material property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role {
    /// Configuration key naming the parameter (also the name of the property)
    pub key: &'static str,

    /// Required number of scalar components
    pub n_components: usize,
}

/// Declares a bundle of parameter references with named fields
///
/// Each field is written once as `name: n_components` and the macro generates:
///
/// * the struct holding one `&'a Parameter` per field
/// * `ROLES`, the list of (key, number of components) in declaration order
/// * `resolve`, which looks up every field with [crate::base::find_parameter] using the
///   field name as the configuration key and stops at the first failure
/// * `bindings`, returning the (key, parameter name) pairs
/// * `evaluate`, returning the (key, value of the first component) pairs at a point
macro_rules! parameter_bundle {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $n_components:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        $vis struct $name<'a> {
            $(
                $(#[$field_meta])*
                pub $field: &'a $crate::base::Parameter,
            )+
        }

        impl<'a> $name<'a> {
            /// Lists the configuration key and number of components of each property
            pub const ROLES: &'static [$crate::material::Role] = &[
                $(
                    $crate::material::Role {
                        key: stringify!($field),
                        n_components: $n_components,
                    },
                )+
            ];

            /// Finds the parameters named by the configuration node
            pub fn resolve(
                config: &$crate::base::ConfigNode,
                parameters: &'a $crate::base::Parameters,
            ) -> $crate::base::Result<Self> {
                Ok($name {
                    $(
                        $field: $crate::base::find_parameter(config, stringify!($field), parameters, $n_components)?,
                    )+
                })
            }

            /// Returns the (configuration key, parameter name) pairs
            pub fn bindings(&self) -> Vec<(&'static str, &'a str)> {
                vec![$((stringify!($field), self.$field.name()),)+]
            }

            /// Returns the (configuration key, value) pairs at position `x` and time `t`
            pub fn evaluate(&self, x: &[f64], t: f64) -> Vec<(&'static str, f64)> {
                vec![$((stringify!($field), self.$field.scalar(x, t)),)+]
            }
        }
    };
}

pub(crate) use parameter_bundle;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
