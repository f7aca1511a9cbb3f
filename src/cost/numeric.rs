/*
 * @Date         : 2026-10-13
 * @Description  : 数值代价：误差函数 + 代价函数（作用于整批数组）
 *
 * 误差函数签名 `(targets, predictions) -> errors`，
 * 代价函数签名 `(targets, activated) -> cost`。
 * 其中 activated = errors + targets，即经过激活后的预测值
 * （线性误差时就是原始预测，sigmoid 误差时就是概率）。
 */

use ndarray::{Array1, ArrayView1, Zip};

/// 概率裁剪下限，避免 ln(0)
const LOG_EPS: f64 = 1e-15;

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// 线性误差：`prediction - target`
pub fn linear_error(targets: ArrayView1<f64>, predictions: ArrayView1<f64>) -> Array1<f64> {
    &predictions - &targets
}

/// 逻辑回归误差：`sigmoid(prediction) - target`
pub fn sigmoid_error(targets: ArrayView1<f64>, predictions: ArrayView1<f64>) -> Array1<f64> {
    predictions.mapv(sigmoid) - targets
}

/// 均方误差
pub fn mean_squared_error(targets: ArrayView1<f64>, predictions: ArrayView1<f64>) -> f64 {
    let n = targets.len() as f64;
    Zip::from(&targets)
        .and(&predictions)
        .fold(0.0, |acc, &y, &p| acc + (p - y).powi(2))
        / n
}

/// 对数损失（交叉熵），`probabilities` 先裁剪到 `[1e-15, 1 - 1e-15]`
pub fn log_loss(targets: ArrayView1<f64>, probabilities: ArrayView1<f64>) -> f64 {
    let n = targets.len() as f64;
    let total = Zip::from(&targets)
        .and(&probabilities)
        .fold(0.0, |acc, &y, &p| {
            let p = p.clamp(LOG_EPS, 1.0 - LOG_EPS);
            acc - (y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        });
    total / n
}

/// 由原始得分（未经 sigmoid）计算对数损失
pub fn sigmoid_log_loss(targets: ArrayView1<f64>, scores: ArrayView1<f64>) -> f64 {
    log_loss(targets, scores.mapv(sigmoid).view())
}

type ErrorFn = dyn Fn(ArrayView1<f64>, ArrayView1<f64>) -> Array1<f64>;
type CostFn = dyn Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64;

/// 数值代价定义：误差函数与代价函数的组合
///
/// # 示例
/// ```ignore
/// let cost = NumericCost::new(sigmoid_error, log_loss);
/// // 等价于
/// let cost = NumericCost::logistic_regression();
/// ```
pub struct NumericCost {
    error_fn: Box<ErrorFn>,
    cost_fn: Box<CostFn>,
}

impl NumericCost {
    pub fn new<E, C>(error_fn: E, cost_fn: C) -> Self
    where
        E: Fn(ArrayView1<f64>, ArrayView1<f64>) -> Array1<f64> + 'static,
        C: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + 'static,
    {
        Self {
            error_fn: Box::new(error_fn),
            cost_fn: Box::new(cost_fn),
        }
    }

    /// 线性回归：线性误差 + 均方误差
    pub fn linear_regression() -> Self {
        Self::new(linear_error, mean_squared_error)
    }

    /// 逻辑回归：sigmoid 误差 + 对数损失
    pub fn logistic_regression() -> Self {
        Self::new(sigmoid_error, log_loss)
    }

    pub fn errors(&self, targets: ArrayView1<f64>, predictions: ArrayView1<f64>) -> Array1<f64> {
        (self.error_fn)(targets, predictions)
    }

    pub fn cost(&self, targets: ArrayView1<f64>, activated: ArrayView1<f64>) -> f64 {
        (self.cost_fn)(targets, activated)
    }
}
