//! 每一步更新后的回调
//!
//! 求解结果不依赖观察者；不需要回调时传入 `&mut |_: &StepRecord<'_>| {}` 即可。

use super::UpdatePolicy;
use crate::utils::format_params;
use ndarray::ArrayView1;
use std::ops::Range;

/// 单步更新的快照
#[derive(Debug, Clone)]
pub struct StepRecord<'a> {
    /// 全局步序号（从 0 开始）
    pub step: usize,
    /// 外层循环序号
    pub epoch: usize,
    /// 本轮外层循环内的批次序号
    pub inner: usize,
    /// 本步使用的（已打乱）训练集行区间
    pub batch: Range<usize>,
    pub policy: UpdatePolicy,
    /// 更新后的代价
    pub cost: f64,
    /// 上一步代价 - 本步代价
    pub cost_change: f64,
    /// 更新后的参数
    pub params: ArrayView1<'a, f64>,
}

pub trait DescentObserver {
    fn on_step(&mut self, record: &StepRecord<'_>);
}

impl<F> DescentObserver for F
where
    F: FnMut(&StepRecord<'_>),
{
    fn on_step(&mut self, record: &StepRecord<'_>) {
        self(record)
    }
}

/// 把每一步写入 `log` 的观察者
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: log::Level,
}

impl LogObserver {
    pub const fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl DescentObserver for LogObserver {
    fn on_step(&mut self, record: &StepRecord<'_>) {
        log::log!(
            self.level,
            "step={} epoch={} batch={:?} cost_change={:.6} cost={:.6} params={}",
            record.step,
            record.epoch,
            record.batch,
            record.cost_change,
            record.cost,
            format_params(record.params)
        );
    }
}
