//! 最小二乘基准解法测试

use super::doubling_set;
use crate::assert_err;
use crate::cost::NumericCost;
use crate::data::TrainingSet;
use crate::errors::DescentError;
use crate::optimizer::{BatchGradientDescent, DescentConfig, least_squares_reference};
use approx::assert_abs_diff_eq;

#[test]
fn test_reference_single_step() {
    // 与整体更新的单步结果一致：θ = 0.01 - 0.1 * (2/2) * (1 * -1.99 + 2 * -3.98) = 1.005
    let set = TrainingSet::from_rows(&[[1.0], [2.0]], &[2.0, 4.0]).unwrap();
    let theta = least_squares_reference(&set, 0.1, 1).unwrap();
    assert_abs_diff_eq!(theta[0], 1.005, epsilon = 1e-12);
}

#[test]
fn test_reference_converges() {
    let theta = least_squares_reference(&doubling_set(), 0.01, 200).unwrap();
    assert_abs_diff_eq!(theta[0], 2.0, epsilon = 1e-6);
}

#[test]
fn test_reference_zero_iterations() {
    let theta = least_squares_reference(&doubling_set(), 0.01, 0).unwrap();
    assert_eq!(theta[0], 0.01);
}

#[test]
fn test_reference_matches_full_batch_solver() {
    let set = doubling_set();
    let reference = least_squares_reference(&set, 0.01, 500).unwrap();
    let outcome = BatchGradientDescent::new(DescentConfig::new().loop_limit(500))
        .unwrap()
        .minimize_numeric(&NumericCost::linear_regression(), &set)
        .unwrap();
    assert_abs_diff_eq!(outcome.params[0], reference[0], epsilon = 0.01);
}

#[test]
fn test_reference_invalid_step() {
    assert_err!(
        least_squares_reference(&doubling_set(), 0.0, 10),
        DescentError::InvalidHyperparameter("step")
    );
}
