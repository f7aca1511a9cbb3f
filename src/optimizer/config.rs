/*
 * @Date         : 2026-10-14
 * @Description  : 求解器超参数
 *
 * 既可用链式方法构造，也可从 JSON 读取（缺省字段取默认值）：
 * ```json
 * { "step": 0.005, "loop_limit": 100, "batch_size": 2 }
 * ```
 */

use crate::errors::{ComparisonOperator, DescentError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 梯度下降超参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentConfig {
    /// 学习率
    pub step: f64,
    /// 最大更新步数（所有批次累计）
    pub loop_limit: usize,
    /// 收敛阈值：相邻两步代价差的绝对值不超过它即停止
    pub step_limit: f64,
    /// 批大小，`None` 为全批量；超过样本数时截断为样本数
    pub batch_size: Option<usize>,
    /// 打乱训练集用的随机种子
    pub seed: u64,
    /// 参数向量的初始值（每一维相同）
    pub initial_guess: f64,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            step: 0.01,
            loop_limit: 50,
            step_limit: 0.00001,
            batch_size: None,
            seed: 0,
            initial_guess: 0.01,
        }
    }
}

impl DescentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn loop_limit(mut self, loop_limit: usize) -> Self {
        self.loop_limit = loop_limit;
        self
    }

    pub fn step_limit(mut self, step_limit: f64) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn full_batch(mut self) -> Self {
        self.batch_size = None;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// 校验超参数
    ///
    /// `loop_limit == 0` 是合法的：此时求解器不做任何更新，直接返回初始参数。
    pub fn validate(&self) -> Result<(), DescentError> {
        check_positive("step", self.step)?;
        check_positive("step_limit", self.step_limit)?;
        if self.batch_size == Some(0) {
            return Err(DescentError::InvalidHyperparameter {
                name: "batch_size",
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1.0,
                value: 0.0,
            });
        }
        if !self.initial_guess.is_finite() {
            return Err(DescentError::InvalidHyperparameter {
                name: "initial_guess",
                operator: ComparisonOperator::Finite,
                threshold: f64::NEG_INFINITY,
                value: self.initial_guess,
            });
        }
        Ok(())
    }

    /// 从 JSON 字符串读取并校验
    ///
    /// 类型层面就无法表示的值（如负的 `loop_limit`、`batch_size`）在反序列化时
    /// 失败，返回 [`DescentError::Config`]；其余非法取值由 [`validate`](Self::validate)
    /// 返回 [`DescentError::InvalidHyperparameter`]。
    pub fn from_json_str(json: &str) -> Result<Self, DescentError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取并校验
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DescentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, DescentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 要求 `value` 为有限正数
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), DescentError> {
    let operator = if !value.is_finite() {
        ComparisonOperator::Finite
    } else if value <= 0.0 {
        ComparisonOperator::GreaterThan
    } else {
        return Ok(());
    };
    Err(DescentError::InvalidHyperparameter {
        name,
        operator,
        threshold: 0.0,
        value,
    })
}
