use nalgebra::{
    DMatrix,
    SymmetricEigen
};

use crate::elementary::inverse::sqrt;

// ─────────────────────────────────────────────────────────────────────────────
// 5 點 Gauss-Legendre（[-1, 1] 上的節點與權重）
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∫_a^b f(x) dx ≈ (b - a)/2 · Σ w_i · f((b - a)/2 · t_i + (a + b)/2)
//
// 對 9 次以下多項式精確。

const GL5_NODES: [f64; 5] = [
    -0.9061798459386640,
    -0.5384693101056831,
    0.0,
    0.5384693101056831,
    0.9061798459386640,
];

const GL5_WEIGHTS: [f64; 5] = [
    0.2369268850561891,
    0.4786286704993665,
    0.5688888888888889,
    0.4786286704993665,
    0.2369268850561891,
];

pub fn gauss_legendre5<F>(f: &F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    apply_rule(f, a, b, &GL5_NODES, &GL5_WEIGHTS)
}

fn apply_rule<F>(f: &F, a: f64, b: f64, nodes: &[f64], weights: &[f64]) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let half_width = (b - a) / 2.0;
    let midpoint = (a + b) / 2.0;
    let sum: f64 = nodes
        .iter()
        .zip(weights.iter())
        .map(|(&t, &w)| w * f(half_width * t + midpoint))
        .sum();
    half_width * sum
}

// ─────────────────────────────────────────────────────────────────────────────
// n 點 Gauss-Legendre - Golub-Welsch
// ─────────────────────────────────────────────────────────────────────────────
//
// Legendre 多項式的三項遞迴式對應一個對稱三對角 Jacobi 矩陣：
//
//   J_{k,k+1} = J_{k+1,k} = β_k = k / √(4k² - 1),  k = 1..n-1
//
// 其特徵值即為節點 t_i，權重 w_i = 2 · v_i[0]²（v_i 為單位特徵向量）。

#[derive(Clone, Debug)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// `points` = 0 時回傳 None
    pub fn new(points: usize) -> Option<GaussLegendre> {
        if points == 0 {
            return None;
        }

        let mut jacobi = DMatrix::<f64>::zeros(points, points);
        for k in 1..points {
            let kf = k as f64;
            let beta = kf / sqrt(4.0 * kf * kf - 1.0);
            jacobi[(k - 1, k)] = beta;
            jacobi[(k, k - 1)] = beta;
        }

        let eigen = SymmetricEigen::new(jacobi);
        let mut pairs: Vec<(f64, f64)> = (0..points)
            .map(|i| {
                let v0 = eigen.eigenvectors[(0, i)];
                (eigen.eigenvalues[i], 2.0 * v0 * v0)
            })
            .collect();
        pairs.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

        let (nodes, weights): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Some(GaussLegendre { nodes, weights })
    }

    pub fn points(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn integrate<F>(&self, f: &F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        apply_rule(f, a, b, &self.nodes, &self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gl5_exact_for_degree_nine() {
        let value = gauss_legendre5(&|x| x.powi(4), -1.0, 1.0);
        assert!((value - 0.4).abs() < 1e-10);

        let value = gauss_legendre5(&|x| x.powi(8) + x.powi(9), 0.0, 1.0);
        assert!((value - (1.0 / 9.0 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_gl5_weights_sum_to_two() {
        let total: f64 = GL5_WEIGHTS.iter().sum();
        assert!((total - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_golub_welsch_matches_table() {
        let rule = GaussLegendre::new(5).unwrap();
        assert_eq!(rule.points(), 5);
        for i in 0..5 {
            assert!((rule.nodes()[i] - GL5_NODES[i]).abs() < 1e-12);
            assert!((rule.weights()[i] - GL5_WEIGHTS[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_golub_welsch_higher_order() {
        let rule = GaussLegendre::new(12).unwrap();
        let value = rule.integrate(&|x| x.powi(22), -1.0, 1.0);
        assert!((value - 2.0 / 23.0).abs() < 1e-12);

        let single = GaussLegendre::new(1).unwrap();
        assert_eq!(single.nodes(), &[0.0]);
        assert!((single.weights()[0] - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_points() {
        assert!(GaussLegendre::new(0).is_none());
    }
}
