use serde::Deserialize;

use crate::integration::adaptivesimpson::ADAPTIVE_SIMPSON_MAX_DEPTH;
use crate::integration::gausslegendre::GaussLegendre;
use crate::integration::quadrature::QuadratureRule;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

#[derive(Deserialize)]
enum QuadratureRuleType {
    Trapezoid,
    Simpson,
    GaussLegendre5,
    GaussLegendre,
    AdaptiveSimpson,
    Romberg
}

#[derive(Deserialize)]
struct QuadratureRuleTypedObject {
    rule: QuadratureRuleType
}

#[derive(Deserialize)]
struct IntervalsJsonProp {
    intervals: usize
}

#[derive(Deserialize)]
struct GaussLegendreJsonProp {
    points: usize
}

fn default_max_depth() -> u32 {
    ADAPTIVE_SIMPSON_MAX_DEPTH
}

#[derive(Deserialize)]
struct AdaptiveSimpsonJsonProp {
    tolerance: f64,
    #[serde(default = "default_max_depth")]
    max_depth: u32
}

#[derive(Deserialize)]
struct RombergJsonProp {
    levels: usize
}

fn get_quadrature_rule_from_json(json_value: serde_json::Value) -> Result<QuadratureRule, ManagerError> {
    let typed_object: QuadratureRuleTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
    match typed_object.rule {
        QuadratureRuleType::Trapezoid => {
            let prop: IntervalsJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            Ok(QuadratureRule::Trapezoid { intervals: prop.intervals })
        },
        QuadratureRuleType::Simpson => {
            let prop: IntervalsJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            Ok(QuadratureRule::Simpson { intervals: prop.intervals })
        },
        QuadratureRuleType::GaussLegendre5 => Ok(QuadratureRule::GaussLegendre5),
        QuadratureRuleType::GaussLegendre => {
            let prop: GaussLegendreJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            let rule = GaussLegendre::new(prop.points)
                .ok_or_else(|| ManagerError::invalid_parameter("points", "must be positive"))?;
            Ok(QuadratureRule::GaussLegendre(rule))
        },
        QuadratureRuleType::AdaptiveSimpson => {
            let prop: AdaptiveSimpsonJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            if !(prop.tolerance >= 0.0) {
                return Err(ManagerError::invalid_parameter(
                    "tolerance",
                    format!("must be non-negative, got {}", prop.tolerance)
                ));
            }
            Ok(QuadratureRule::AdaptiveSimpson {
                tolerance: prop.tolerance,
                max_depth: prop.max_depth.min(ADAPTIVE_SIMPSON_MAX_DEPTH)
            })
        },
        QuadratureRuleType::Romberg => {
            let prop: RombergJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            Ok(QuadratureRule::Romberg { levels: prop.levels })
        }
    }
}

pub struct QuadratureRuleManager;

impl QuadratureRuleManager {
    pub fn new() -> Manager<QuadratureRule> {
        Manager::new(get_quadrature_rule_from_json)
    }
}
