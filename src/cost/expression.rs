/*
 * @Date         : 2026-10-13
 * @Description  : 代价表达式：可代入参数/样本求值，并可对任一参数求偏导
 *
 * 逐参数（坐标式）更新的求解器只依赖这里的 trait，
 * 不关心偏导是由符号引擎推出来的还是调用方手写的闭式解。
 */

use super::numeric::sigmoid;
use ndarray::{ArrayView1, ArrayView2, Zip};

/// 代价表达式 f(θ; x, y)
///
/// `value`/`partial` 针对单个样本；批量平均由默认方法给出。
pub trait CostExpression {
    /// 代入参数 `params`、特征 `features`、目标值 `target` 后的代价
    fn value(&self, params: ArrayView1<f64>, features: ArrayView1<f64>, target: f64) -> f64;

    /// ∂f/∂θ_index 在给定点的值
    fn partial(
        &self,
        index: usize,
        params: ArrayView1<f64>,
        features: ArrayView1<f64>,
        target: f64,
    ) -> f64;

    /// 表达式声明的参数个数；`None` 表示不限（由特征列数决定）
    fn arity(&self) -> Option<usize> {
        None
    }

    /// 整批样本上的平均代价
    fn mean_value(
        &self,
        params: ArrayView1<f64>,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> f64 {
        let total = Zip::from(features.rows())
            .and(&targets)
            .fold(0.0, |acc, row, &y| acc + self.value(params, row, y));
        total / targets.len() as f64
    }

    /// 整批样本上的平均偏导
    fn mean_partial(
        &self,
        index: usize,
        params: ArrayView1<f64>,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> f64 {
        let total = Zip::from(features.rows())
            .and(&targets)
            .fold(0.0, |acc, row, &y| acc + self.partial(index, params, row, y));
        total / targets.len() as f64
    }
}

type ValueFn = dyn Fn(ArrayView1<f64>, ArrayView1<f64>, f64) -> f64;
type PartialFn = dyn Fn(usize, ArrayView1<f64>, ArrayView1<f64>, f64) -> f64;

/// 由闭包给出的闭式代价表达式
///
/// # 示例
/// ```ignore
/// // f = (θ·x - y)^2，∂f/∂θ_j = 2(θ·x - y)x_j
/// let cost = ClosedFormCost::new(
///     |t, x, y| (t.dot(&x) - y).powi(2),
///     |j, t, x, y| 2.0 * (t.dot(&x) - y) * x[j],
/// );
/// ```
pub struct ClosedFormCost {
    value: Box<ValueFn>,
    partial: Box<PartialFn>,
    arity: Option<usize>,
}

impl ClosedFormCost {
    pub fn new<V, P>(value: V, partial: P) -> Self
    where
        V: Fn(ArrayView1<f64>, ArrayView1<f64>, f64) -> f64 + 'static,
        P: Fn(usize, ArrayView1<f64>, ArrayView1<f64>, f64) -> f64 + 'static,
    {
        Self {
            value: Box::new(value),
            partial: Box::new(partial),
            arity: None,
        }
    }

    /// 声明参数个数，求解时会与特征列数比对
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    /// 平方误差 `(θ·x - y)^2`
    pub fn squared_error() -> Self {
        Self::new(
            |t, x, y| (t.dot(&x) - y).powi(2),
            |j, t, x, y| 2.0 * (t.dot(&x) - y) * x[j],
        )
    }

    /// 逻辑回归对数损失 `-(y ln p + (1-y) ln(1-p))`，`p = σ(θ·x)`
    pub fn logistic() -> Self {
        Self::new(
            |t, x, y| {
                let p = sigmoid(t.dot(&x)).clamp(1e-15, 1.0 - 1e-15);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            },
            |j, t, x, y| (sigmoid(t.dot(&x)) - y) * x[j],
        )
    }
}

impl CostExpression for ClosedFormCost {
    fn value(&self, params: ArrayView1<f64>, features: ArrayView1<f64>, target: f64) -> f64 {
        (self.value)(params, features, target)
    }

    fn partial(
        &self,
        index: usize,
        params: ArrayView1<f64>,
        features: ArrayView1<f64>,
        target: f64,
    ) -> f64 {
        (self.partial)(index, params, features, target)
    }

    fn arity(&self) -> Option<usize> {
        self.arity
    }
}
