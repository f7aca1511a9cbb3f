/*
 * @Date         : 2026-10-17
 * @Description  : 线性回归集成测试
 *
 * - 单特征 y = 2x：全批量，两种更新策略都应收敛到 2.0 附近（容差 0.1）
 * - 双特征 y = x1 + 2*x2：小批量（批大小 2），收敛到 [1, 2] 附近
 */

use approx::assert_abs_diff_eq;
use batch_descent::cost::{ClosedFormCost, NumericCost};
use batch_descent::data::TrainingSet;
use batch_descent::optimizer::{BatchGradientDescent, DescentConfig, least_squares_reference};

fn doubling_set() -> TrainingSet {
    TrainingSet::from_rows(&[[1.0], [2.0], [3.0], [4.0]], &[2.0, 4.0, 6.0, 8.0]).unwrap()
}

#[test]
fn test_doubling_full_batch_both_policies() {
    let set = doubling_set();
    let solver = BatchGradientDescent::new(DescentConfig::new().loop_limit(1000)).unwrap();

    let numeric = solver
        .minimize_numeric(&NumericCost::linear_regression(), &set)
        .unwrap();
    assert!(numeric.converged);
    assert!(numeric.steps < 1000);
    assert_abs_diff_eq!(numeric.params[0], 2.0, epsilon = 0.1);

    let expression = solver
        .minimize_expression(&ClosedFormCost::squared_error(), &set)
        .unwrap();
    assert!(expression.converged);
    assert_abs_diff_eq!(expression.params[0], 2.0, epsilon = 0.1);

    let reference = least_squares_reference(&set, 0.01, 1000).unwrap();
    assert_abs_diff_eq!(reference[0], 2.0, epsilon = 1e-6);
}

#[test]
fn test_two_features_mini_batch() {
    let rows = [
        [0.0, 1.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [2.0, 1.0],
        [1.0, 2.0],
        [3.0, 1.0],
        [2.0, 3.0],
        [0.0, 2.0],
    ];
    let targets: Vec<f64> = rows.iter().map(|r| r[0] + 2.0 * r[1]).collect();
    let set = TrainingSet::from_rows(&rows, &targets).unwrap();

    let config = DescentConfig::new()
        .step(0.02)
        .loop_limit(3000)
        .step_limit(1e-12)
        .batch_size(2)
        .seed(123);
    let outcome = BatchGradientDescent::new(config)
        .unwrap()
        .minimize_numeric(&NumericCost::linear_regression(), &set)
        .unwrap();

    assert_eq!(outcome.params.len(), 2);
    assert_abs_diff_eq!(outcome.params[0], 1.0, epsilon = 0.05);
    assert_abs_diff_eq!(outcome.params[1], 2.0, epsilon = 0.05);
    assert!(outcome.final_cost() < outcome.initial_cost);
}

#[test]
fn test_row_target_mismatch_fails_before_solving() {
    let result = TrainingSet::from_rows(&[[1.0], [2.0], [3.0]], &[2.0, 4.0]);
    assert!(matches!(
        result,
        Err(batch_descent::DescentError::DimensionMismatch {
            expected: 3,
            got: 2,
            ..
        })
    ));
}

#[test]
fn test_config_from_json() {
    let config = DescentConfig::from_json_str(r#"{ "step": 0.01, "loop_limit": 1000 }"#).unwrap();
    let outcome = BatchGradientDescent::new(config)
        .unwrap()
        .minimize_numeric(&NumericCost::linear_regression(), &doubling_set())
        .unwrap();
    assert_abs_diff_eq!(outcome.params[0], 2.0, epsilon = 0.1);
}
