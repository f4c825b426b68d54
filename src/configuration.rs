use std::cell::{
    Ref,
    RefCell
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::integration::quadrature::QuadratureRule;
use crate::integration::quadraturerulemanager::QuadratureRuleManager;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

/// 設定檔格式：
///
/// ```json
/// {
///     "quadrature": [
///         { "name": "fine", "rule": "Simpson", "intervals": 1000 },
///         { "name": "gl16", "rule": "GaussLegendre", "points": 16 }
///     ]
/// }
/// ```
#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    quadrature: Vec<serde_json::Value>
}

pub struct Configuration {
    quadrature_manager_cell: RefCell<Manager<QuadratureRule>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            quadrature_manager_cell: RefCell::new(QuadratureRuleManager::new())
        }
    }

    pub fn quadrature_manager(&self) -> Ref<'_, Manager<QuadratureRule>> {
        self.quadrature_manager_cell.borrow()
    }

    pub fn quadrature_rule(&self, name: &str) -> Result<QuadratureRule, ManagerError> {
        self.quadrature_manager().get(name)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)?;
        info!("configuration loaded from {}", file_path.as_ref().display());
        Ok(())
    }

    pub fn from_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let quadrature_manager = self.quadrature_manager_cell.borrow();
        quadrature_manager.insert_obj_from_json_vec(&json_prop.quadrature)?;
        info!("{} quadrature rules registered", quadrature_manager.len());
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::quadrature::Quadrature;

    #[test]
    fn test_from_str() {
        let config = Configuration::new();
        config
            .from_str(r#"{ "quadrature": [ { "name": "gl5", "rule": "GaussLegendre5" } ] }"#)
            .unwrap();
        let rule = config.quadrature_rule("gl5").unwrap();
        let value = rule.integrate(&|x| x.powi(4), -1.0, 1.0);
        assert!((value - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document() {
        let config = Configuration::default();
        config.from_str("{}").unwrap();
        assert!(config.quadrature_manager().is_empty());
        assert!(matches!(config.quadrature_rule("gl5"), Err(ManagerError::NameNotFoundError(_))));
    }

    #[test]
    fn test_malformed_document() {
        let config = Configuration::new();
        assert!(matches!(config.from_str("{ not json"), Err(ManagerError::JsonParseError(_))));
    }
}
