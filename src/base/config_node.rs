use super::ConfigError;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Defines the key holding the model-kind tag
pub const TYPE_KEY: &str = "type";

/// Holds a read-only view of one object in the configuration tree
///
/// The node records which keys have been read, so that the caller can report
/// entries that no factory consumed (typically misspelled keys).
///
/// # Paths
///
/// Every node carries a dotted path (e.g. `solids.0`) used in error messages;
/// keys are reported as `path.key`.
pub struct ConfigNode<'a> {
    path: String,
    map: &'a Map<String, Value>,
    read: RefCell<BTreeSet<String>>,
}

impl<'a> ConfigNode<'a> {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `value` -- must be a JSON object
    /// * `path` -- location of the node, used in error messages
    pub fn new(value: &'a Value, path: &str) -> Result<Self, ConfigError> {
        match value.as_object() {
            Some(map) => Ok(ConfigNode {
                path: path.to_string(),
                map,
                read: RefCell::new(BTreeSet::new()),
            }),
            None => Err(ConfigError::NotAnObject { path: path.to_string() }),
        }
    }

    /// Returns the location of this node
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the full path of a key in this node
    pub fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Checks that the `type` tag equals `tag` and marks it as read
    pub fn check_tag(&self, tag: &'static str) -> Result<(), ConfigError> {
        let found = self.get_string(TYPE_KEY)?;
        if found != tag {
            return Err(ConfigError::TagMismatch {
                path: self.key_path(TYPE_KEY),
                expected: tag,
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Returns a required string without marking the key as read
    pub fn peek_string(&self, key: &str) -> Result<&'a str, ConfigError> {
        match self.map.get(key) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(self.wrong_type(key, "a string")),
            None => Err(ConfigError::MissingKey {
                path: self.key_path(key),
            }),
        }
    }

    /// Returns a required string
    pub fn get_string(&self, key: &str) -> Result<&'a str, ConfigError> {
        let value = self.peek_string(key)?;
        self.mark(key);
        Ok(value)
    }

    /// Returns a string if the key is present
    ///
    /// A present key holding another type is still an error.
    pub fn get_optional_string(&self, key: &str) -> Result<Option<&'a str>, ConfigError> {
        if !self.map.contains_key(key) {
            return Ok(None);
        }
        self.get_string(key).map(Some)
    }

    /// Returns a required number
    pub fn get_number(&self, key: &str) -> Result<f64, ConfigError> {
        match self.map.get(key) {
            Some(value) => match value.as_f64() {
                Some(x) => {
                    self.mark(key);
                    Ok(x)
                }
                None => Err(self.wrong_type(key, "a number")),
            },
            None => Err(ConfigError::MissingKey {
                path: self.key_path(key),
            }),
        }
    }

    /// Returns a required child node
    pub fn get_subtree(&self, key: &str) -> Result<ConfigNode<'a>, ConfigError> {
        match self.map.get(key) {
            Some(value) => {
                let child = ConfigNode::new(value, &self.key_path(key))?;
                self.mark(key);
                Ok(child)
            }
            None => Err(ConfigError::MissingKey {
                path: self.key_path(key),
            }),
        }
    }

    /// Returns the keys that have not been read yet (sorted)
    pub fn unused_keys(&self) -> Vec<String> {
        let read = self.read.borrow();
        let mut keys: Vec<_> = self.map.keys().filter(|k| !read.contains(*k)).cloned().collect();
        keys.sort();
        keys
    }

    /// Fails if any key has not been read
    pub fn check_all_read(&self) -> Result<(), ConfigError> {
        let keys = self.unused_keys();
        if keys.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::UnusedKeys {
                path: self.path.clone(),
                keys,
            })
        }
    }

    fn mark(&self, key: &str) {
        self.read.borrow_mut().insert(key.to_string());
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::WrongType {
            path: self.key_path(key),
            expected,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ConfigNode;
    use crate::base::ConfigError;
    use serde_json::json;

    #[test]
    fn new_captures_errors() {
        let data = json!([1, 2]);
        assert!(matches!(
            ConfigNode::new(&data, "solids").err(),
            Some(ConfigError::NotAnObject { path }) if path == "solids"
        ));
    }

    #[test]
    fn key_path_works() {
        let data = json!({});
        let root = ConfigNode::new(&data, "").unwrap();
        assert_eq!(root.key_path("type"), "type");
        let node = ConfigNode::new(&data, "solids.1").unwrap();
        assert_eq!(node.key_path("type"), "solids.1.type");
    }

    #[test]
    fn check_tag_works() {
        let data = json!({"type": "Ehlers"});
        let node = ConfigNode::new(&data, "solid").unwrap();
        assert_eq!(node.unused_keys(), &["type"]);
        node.check_tag("Ehlers").unwrap();
        assert_eq!(node.unused_keys().len(), 0);
    }

    #[test]
    fn check_tag_captures_errors() {
        let data = json!({"type": "Lubby2"});
        let node = ConfigNode::new(&data, "solid").unwrap();
        assert_eq!(
            format!("{}", node.check_tag("Ehlers").err().unwrap()),
            "'solid.type' is 'Lubby2' but 'Ehlers' was expected"
        );

        let data = json!({"kind": "Ehlers"});
        let node = ConfigNode::new(&data, "solid").unwrap();
        assert_eq!(
            format!("{}", node.check_tag("Ehlers").err().unwrap()),
            "missing required key 'solid.type'"
        );

        let data = json!({"type": 1});
        let node = ConfigNode::new(&data, "solid").unwrap();
        assert_eq!(
            format!("{}", node.check_tag("Ehlers").err().unwrap()),
            "key 'solid.type' must be a string"
        );
    }

    #[test]
    fn getters_work() {
        let data = json!({
            "name": "sand",
            "density": 2.7,
            "count": 3,
            "inner": {"a": "b"},
        });
        let node = ConfigNode::new(&data, "").unwrap();
        assert_eq!(node.peek_string("name").unwrap(), "sand");
        assert_eq!(node.unused_keys(), &["count", "density", "inner", "name"]);
        assert_eq!(node.get_string("name").unwrap(), "sand");
        assert_eq!(node.get_number("density").unwrap(), 2.7);
        assert_eq!(node.get_number("count").unwrap(), 3.0);
        assert_eq!(node.get_optional_string("missing").unwrap(), None);
        let inner = node.get_subtree("inner").unwrap();
        assert_eq!(inner.path(), "inner");
        assert_eq!(inner.get_string("a").unwrap(), "b");
        assert_eq!(node.unused_keys().len(), 0);
        node.check_all_read().unwrap();
    }

    #[test]
    fn getters_capture_errors() {
        let data = json!({"name": 1.0, "density": "high", "inner": 4});
        let node = ConfigNode::new(&data, "m").unwrap();
        assert_eq!(
            format!("{}", node.get_string("name").err().unwrap()),
            "key 'm.name' must be a string"
        );
        assert_eq!(
            format!("{}", node.get_optional_string("name").err().unwrap()),
            "key 'm.name' must be a string"
        );
        assert_eq!(
            format!("{}", node.get_number("density").err().unwrap()),
            "key 'm.density' must be a number"
        );
        assert_eq!(
            format!("{}", node.get_number("young").err().unwrap()),
            "missing required key 'm.young'"
        );
        assert_eq!(
            format!("{}", node.get_subtree("inner").err().unwrap()),
            "'m.inner' must be an object"
        );
        assert_eq!(
            format!("{}", node.check_all_read().err().unwrap()),
            "unused keys in 'm': density, inner, name"
        );
    }
}
