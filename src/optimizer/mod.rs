/*
 * @Date         : 2026-10-15
 * @Description  : 优化器模块：小批量梯度下降（逐参数 / 整体 两种更新策略）
 */

mod config;
mod core;
mod observer;
mod policy;
mod reference;

#[cfg(test)]
mod tests;

pub use config::DescentConfig;
pub use self::core::{BatchGradientDescent, DescentOutcome};
pub use observer::{DescentObserver, LogObserver, StepRecord};
pub use policy::UpdatePolicy;
pub use reference::least_squares_reference;
