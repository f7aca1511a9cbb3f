use super::config::check_positive;
use crate::data::TrainingSet;
use crate::errors::DescentError;
use crate::utils::format_params;
use ndarray::Array1;

/// 最小二乘的基准解法：全批量、固定迭代次数、不做收敛判断、不打乱
///
/// 每步 θ ← θ - step · (2/m) · Xᵀ(Xθ - y)，初始 θ 每一维为 0.01。
/// 用来与 [`BatchGradientDescent`](super::BatchGradientDescent) 的结果对照。
pub fn least_squares_reference(
    set: &TrainingSet,
    step: f64,
    iterations: usize,
) -> Result<Array1<f64>, DescentError> {
    check_positive("step", step)?;
    let x = set.features();
    let y = set.targets();
    let m = set.len() as f64;

    let mut theta = Array1::from_elem(set.n_features(), 0.01);
    for iter in 0..iterations {
        let error = x.dot(&theta) - y;
        let total_cost = error.mapv(|e| e * e).sum() * (2.0 / m);
        let gradient = x.t().dot(&error) * (2.0 / m);
        theta.scaled_add(-step, &gradient);
        log::trace!(
            "iter {} | J: {:.3} | theta {} grad {}",
            iter,
            total_cost,
            format_params(&theta),
            format_params(&gradient)
        );
    }
    Ok(theta)
}
