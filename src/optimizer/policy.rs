/*
 * @Date         : 2026-10-14
 * @Description  : 两种参数更新策略
 *
 * - Sequential（逐参数）：一轮扫描中依次对每个参数求偏导并立即更新，
 *   后面参数的偏导使用本轮已更新过的前面参数
 * - Simultaneous（整体）：用同一组旧参数算出整个梯度向量，一次性更新
 */

use crate::cost::{CostExpression, NumericCost};
use crate::data::TrainingSet;
use crate::errors::{DescentError, Dimension};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// 参数更新策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdatePolicy {
    /// 逐参数（坐标式）更新，用于 [`CostExpression`]
    Sequential,
    /// 整体梯度更新，用于 [`NumericCost`]
    Simultaneous,
}

/// 单步更新规则（求解主循环只依赖此 trait）
pub(crate) trait UpdateRule {
    fn policy(&self) -> UpdatePolicy;

    /// 代价定义声明的参数个数
    fn arity(&self) -> Option<usize> {
        None
    }

    /// 初始参数在整个训练集上的代价
    fn initial_cost(&self, params: ArrayView1<f64>, set: &TrainingSet)
    -> Result<f64, DescentError>;

    /// 用 `batch` 行对参数做一次更新，返回更新后的代价
    fn apply(
        &self,
        params: &mut Array1<f64>,
        set: &TrainingSet,
        batch: Range<usize>,
        step: f64,
    ) -> Result<f64, DescentError>;
}

/// 逐参数更新；更新后的代价在整个训练集上取平均
pub(crate) struct SequentialUpdate<'a, C: ?Sized> {
    pub(crate) cost: &'a C,
}

impl<C: CostExpression + ?Sized> UpdateRule for SequentialUpdate<'_, C> {
    fn policy(&self) -> UpdatePolicy {
        UpdatePolicy::Sequential
    }

    fn arity(&self) -> Option<usize> {
        self.cost.arity()
    }

    fn initial_cost(
        &self,
        params: ArrayView1<f64>,
        set: &TrainingSet,
    ) -> Result<f64, DescentError> {
        Ok(self
            .cost
            .mean_value(params, set.features().view(), set.targets().view()))
    }

    fn apply(
        &self,
        params: &mut Array1<f64>,
        set: &TrainingSet,
        batch: Range<usize>,
        step: f64,
    ) -> Result<f64, DescentError> {
        let (x_batch, y_batch) = set.batch(batch);
        for index in 0..params.len() {
            let partial = self
                .cost
                .mean_partial(index, params.view(), x_batch, y_batch);
            params[index] -= step * partial;
        }
        self.initial_cost(params.view(), set)
    }
}

/// 整体更新：θ ← θ - step · (2/m) · Xᵀ·errors；更新后的代价在当前批次上计算
pub(crate) struct SimultaneousUpdate<'a> {
    pub(crate) cost: &'a NumericCost,
}

impl SimultaneousUpdate<'_> {
    /// 返回 (errors, cost)
    fn evaluate(
        &self,
        params: ArrayView1<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, f64), DescentError> {
        let predictions = x.dot(&params);
        let errors = self.cost.errors(y, predictions.view());
        if errors.len() != y.len() {
            return Err(DescentError::dimension(
                Dimension::ErrorsVsTargets,
                y.len(),
                errors.len(),
            ));
        }
        // errors + targets 即激活后的预测值（线性时为 X·θ，逻辑回归时为 σ(X·θ)）
        let activated = &errors + &y;
        let cost = self.cost.cost(y, activated.view());
        Ok((errors, cost))
    }
}

impl UpdateRule for SimultaneousUpdate<'_> {
    fn policy(&self) -> UpdatePolicy {
        UpdatePolicy::Simultaneous
    }

    fn initial_cost(
        &self,
        params: ArrayView1<f64>,
        set: &TrainingSet,
    ) -> Result<f64, DescentError> {
        let (_, cost) = self.evaluate(params, set.features().view(), set.targets().view())?;
        Ok(cost)
    }

    fn apply(
        &self,
        params: &mut Array1<f64>,
        set: &TrainingSet,
        batch: Range<usize>,
        step: f64,
    ) -> Result<f64, DescentError> {
        let (x_batch, y_batch) = set.batch(batch);
        let (errors, _) = self.evaluate(params.view(), x_batch, y_batch)?;
        let gradient = x_batch.t().dot(&errors) * (2.0 / x_batch.nrows() as f64);
        params.scaled_add(-step, &gradient);

        let (_, cost) = self.evaluate(params.view(), x_batch, y_batch)?;
        Ok(cost)
    }
}
