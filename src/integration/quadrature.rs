use crate::integration::adaptivesimpson::adaptive_simpson_with_depth;
use crate::integration::gausslegendre::{
    gauss_legendre5,
    GaussLegendre
};
use crate::integration::romberg::romberg_integration;
use crate::integration::simpson::simpson_integral;
use crate::integration::trapezoid::integral;

/// 對任意一元實函數做定積分
pub trait Quadrature {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> f64;
}

/// 已設定好解析度參數的積分法，可由 JSON 設定檔建立
/// （見 `QuadratureRuleManager`）。
#[derive(Clone, Debug)]
pub enum QuadratureRule {
    Trapezoid { intervals: usize },
    Simpson { intervals: usize },
    GaussLegendre5,
    GaussLegendre(GaussLegendre),
    AdaptiveSimpson { tolerance: f64, max_depth: u32 },
    Romberg { levels: usize },
}

impl QuadratureRule {
    pub fn method_name(&self) -> &'static str {
        match self {
            QuadratureRule::Trapezoid { .. } => "Trapezoid",
            QuadratureRule::Simpson { .. } => "Simpson",
            QuadratureRule::GaussLegendre5 => "GaussLegendre5",
            QuadratureRule::GaussLegendre(_) => "GaussLegendre",
            QuadratureRule::AdaptiveSimpson { .. } => "AdaptiveSimpson",
            QuadratureRule::Romberg { .. } => "Romberg",
        }
    }
}

impl Quadrature for QuadratureRule {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> f64 {
        match self {
            QuadratureRule::Trapezoid { intervals } => integral(f, a, b, *intervals),
            QuadratureRule::Simpson { intervals } => simpson_integral(f, a, b, *intervals),
            QuadratureRule::GaussLegendre5 => gauss_legendre5(f, a, b),
            QuadratureRule::GaussLegendre(rule) => rule.integrate(f, a, b),
            QuadratureRule::AdaptiveSimpson { tolerance, max_depth } => {
                adaptive_simpson_with_depth(f, a, b, *tolerance, *max_depth)
            },
            QuadratureRule::Romberg { levels } => romberg_integration(f, a, b, *levels),
        }
    }
}
