/*
 * @Date         : 2026-10-16
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - config: 超参数构造、校验与 JSON 读取
 * - simultaneous: 整体更新（NumericCost）
 * - sequential: 逐参数更新（CostExpression）
 * - observer: 每步回调
 * - reference: 最小二乘基准解法
 */

mod reference;

use crate::data::TrainingSet;

/// y = 2x，单特征
fn doubling_set() -> TrainingSet {
    TrainingSet::from_rows(&[[1.0], [2.0], [3.0], [4.0]], &[2.0, 4.0, 6.0, 8.0]).unwrap()
}

/// 两个特征的二分类样本
fn logistic_set() -> TrainingSet {
    TrainingSet::from_rows(
        &[[0.0, 10.0], [1.0, 12.0], [10.0, 5.0], [12.0, 3.0]],
        &[1.0, 1.0, 0.0, 0.0],
    )
    .unwrap()
}
