/*
 * @Date         : 2026-10-15
 * @Description  : 小批量梯度下降求解器
 *
 * 两种变体共用同一套批次/收敛控制流程：
 * 1. 计算初始参数的代价
 * 2. 用固定种子同步打乱特征行与目标值
 * 3. 外层循环：|代价变化| > step_limit 且 总步数 < loop_limit
 *    内层循环：每轮 floor(样本数 / 批大小) 个批次，每个批次更新一次参数
 * 4. 批次窗口的偏移量跨外层循环保留，越过末尾时回绕到 0
 */

use super::observer::{DescentObserver, StepRecord};
use super::policy::{SequentialUpdate, SimultaneousUpdate, UpdateRule};
use super::{DescentConfig, UpdatePolicy};
use crate::cost::{CostExpression, NumericCost};
use crate::data::{BatchWindow, TrainingSet};
use crate::errors::{DescentError, Dimension};
use crate::utils::format_params;
use log::{debug, warn};
use ndarray::Array1;
use serde::Serialize;

/// 一次求解的结果
///
/// 可序列化为 JSON 保存代价曲线（非有限的代价写为 `null`）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescentOutcome {
    /// 最终参数，长度等于特征列数
    pub params: Array1<f64>,
    /// 初始参数在整个训练集上的代价
    pub initial_cost: f64,
    /// 每一步更新后的代价
    pub costs: Vec<f64>,
    /// 实际更新步数
    pub steps: usize,
    /// 执行过的外层循环次数
    pub epochs: usize,
    /// 是否因代价变化低于阈值而停止（否则为达到 loop_limit）
    pub converged: bool,
}

impl DescentOutcome {
    /// 最后一步的代价；未做任何更新时为初始代价
    pub fn final_cost(&self) -> f64 {
        self.costs.last().copied().unwrap_or(self.initial_cost)
    }
}

/// 小批量梯度下降求解器
///
/// # 示例
/// ```ignore
/// let config = DescentConfig::new().step(0.005).loop_limit(100);
/// let solver = BatchGradientDescent::new(config)?;
/// let outcome = solver.minimize_numeric(&NumericCost::logistic_regression(), &set)?;
/// println!("{}", outcome.params);
/// ```
#[derive(Debug, Clone)]
pub struct BatchGradientDescent {
    config: DescentConfig,
    initial_params: Option<Array1<f64>>,
}

impl BatchGradientDescent {
    /// 创建求解器，超参数非法时返回 [`DescentError::InvalidHyperparameter`]
    pub fn new(config: DescentConfig) -> Result<Self, DescentError> {
        config.validate()?;
        Ok(Self {
            config,
            initial_params: None,
        })
    }

    /// 指定初始参数（否则每一维取 `initial_guess`）
    ///
    /// 长度在求解时与特征列数比对。
    pub fn with_initial_params(mut self, params: Vec<f64>) -> Self {
        self.initial_params = Some(Array1::from_vec(params));
        self
    }

    pub fn config(&self) -> &DescentConfig {
        &self.config
    }

    /// 逐参数更新求解（代价由 [`CostExpression`] 给出）
    pub fn minimize_expression<C>(
        &self,
        cost: &C,
        set: &TrainingSet,
    ) -> Result<DescentOutcome, DescentError>
    where
        C: CostExpression + ?Sized,
    {
        self.minimize_expression_with(cost, set, &mut |_: &StepRecord<'_>| {})
    }

    pub fn minimize_expression_with<C, O>(
        &self,
        cost: &C,
        set: &TrainingSet,
        observer: &mut O,
    ) -> Result<DescentOutcome, DescentError>
    where
        C: CostExpression + ?Sized,
        O: DescentObserver + ?Sized,
    {
        self.run(&SequentialUpdate { cost }, set, observer)
    }

    /// 整体更新求解（代价由 [`NumericCost`] 给出）
    pub fn minimize_numeric(
        &self,
        cost: &NumericCost,
        set: &TrainingSet,
    ) -> Result<DescentOutcome, DescentError> {
        self.minimize_numeric_with(cost, set, &mut |_: &StepRecord<'_>| {})
    }

    pub fn minimize_numeric_with<O>(
        &self,
        cost: &NumericCost,
        set: &TrainingSet,
        observer: &mut O,
    ) -> Result<DescentOutcome, DescentError>
    where
        O: DescentObserver + ?Sized,
    {
        self.run(&SimultaneousUpdate { cost }, set, observer)
    }

    fn initial_params(&self, n_features: usize) -> Result<Array1<f64>, DescentError> {
        match &self.initial_params {
            Some(params) if params.len() != n_features => Err(DescentError::dimension(
                Dimension::ParamsVsFeatures,
                n_features,
                params.len(),
            )),
            Some(params) => Ok(params.clone()),
            None => Ok(Array1::from_elem(n_features, self.config.initial_guess)),
        }
    }

    fn run<R, O>(
        &self,
        rule: &R,
        set: &TrainingSet,
        observer: &mut O,
    ) -> Result<DescentOutcome, DescentError>
    where
        R: UpdateRule,
        O: DescentObserver + ?Sized,
    {
        let n_features = set.n_features();
        if let Some(arity) = rule.arity() {
            if arity != n_features {
                return Err(DescentError::dimension(
                    Dimension::ParamsVsFeatures,
                    n_features,
                    arity,
                ));
            }
        }
        let mut params = self.initial_params(n_features)?;

        let DescentConfig {
            step,
            loop_limit,
            step_limit,
            batch_size,
            seed,
            ..
        } = self.config;
        let policy: UpdatePolicy = rule.policy();

        let initial_cost = rule.initial_cost(params.view(), set)?;
        debug!(
            "{:?} 求解开始：样本数={}，批大小={:?}，初始代价={}，初始参数={}",
            policy,
            set.len(),
            batch_size,
            initial_cost,
            format_params(&params)
        );

        let shuffled = set.shuffled(seed);
        let mut window = BatchWindow::new(shuffled.len(), batch_size)?;
        let batches_per_epoch = window.batches_per_epoch();

        // NaN 的代价变化不算收敛，发散时照样跑到 loop_limit
        let converged = |change: f64| change.abs() <= step_limit;

        let mut cost = initial_cost;
        let mut cost_change = f64::INFINITY;
        let mut costs = Vec::new();
        let mut total = 0;
        let mut epochs = 0;
        let mut diverged = false;

        while !converged(cost_change) && total < loop_limit {
            let mut inner = 0;
            while inner < batches_per_epoch && total < loop_limit {
                let batch = window.current();
                let previous_cost = cost;
                cost = rule.apply(&mut params, &shuffled, batch.clone(), step)?;
                cost_change = previous_cost - cost;
                costs.push(cost);

                if !cost.is_finite() && !diverged {
                    warn!(
                        "第{}步代价变为{}（学习率{}可能过大），继续迭代至loop_limit",
                        total, cost, step
                    );
                    diverged = true;
                }

                observer.on_step(&StepRecord {
                    step: total,
                    epoch: epochs,
                    inner,
                    batch,
                    policy,
                    cost,
                    cost_change,
                    params: params.view(),
                });

                window.advance();
                inner += 1;
                total += 1;
            }
            epochs += 1;
        }

        let outcome = DescentOutcome {
            params,
            initial_cost,
            costs,
            steps: total,
            epochs,
            converged: converged(cost_change),
        };
        debug!(
            "{:?} 求解结束：步数={}，收敛={}，最终代价={}，参数={}",
            policy,
            outcome.steps,
            outcome.converged,
            outcome.final_cost(),
            format_params(&outcome.params)
        );
        Ok(outcome)
    }
}
