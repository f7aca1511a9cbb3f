use super::*;
use approx::assert_abs_diff_eq;
use ndarray::array;

#[test]
fn test_sigmoid() {
    assert_abs_diff_eq!(sigmoid(0.0), 0.5);
    assert!(sigmoid(40.0) > 0.999_999);
    assert!(sigmoid(-40.0) < 1e-6);
}

#[test]
fn test_linear_and_sigmoid_error() {
    let y = array![1.0, 0.0];
    let p = array![3.0, 0.0];
    assert_eq!(linear_error(y.view(), p.view()), array![2.0, 0.0]);
    let e = sigmoid_error(y.view(), p.view());
    assert_abs_diff_eq!(e[0], sigmoid(3.0) - 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(e[1], 0.5, epsilon = 1e-12);
}

#[test]
fn test_mean_squared_error() {
    let y = array![1.0, 2.0, 3.0];
    let p = array![1.0, 4.0, 0.0];
    // (0 + 4 + 9) / 3
    assert_abs_diff_eq!(mean_squared_error(y.view(), p.view()), 13.0 / 3.0);
}

#[test]
fn test_log_loss() {
    let y = array![1.0, 0.0];
    let p = array![0.8, 0.4];
    let expected = -((0.8f64).ln() + (0.6f64).ln()) / 2.0;
    assert_abs_diff_eq!(log_loss(y.view(), p.view()), expected, epsilon = 1e-12);

    // 概率为 0/1 时被裁剪，不会得到无穷大
    let clipped = log_loss(array![1.0].view(), array![0.0].view());
    assert!(clipped.is_finite());
    assert_abs_diff_eq!(clipped, -(1e-15f64).ln(), epsilon = 1e-6);
}

#[test]
fn test_sigmoid_log_loss_matches_log_loss() {
    let y = array![1.0, 1.0, 0.0, 0.0];
    let scores = array![0.1, 0.13, 0.15, 0.15];
    let probabilities = scores.mapv(sigmoid);
    assert_abs_diff_eq!(
        sigmoid_log_loss(y.view(), scores.view()),
        log_loss(y.view(), probabilities.view()),
        epsilon = 1e-12
    );
}

#[test]
fn test_numeric_cost_presets() {
    let y = array![2.0, 4.0];
    let p = array![1.0, 5.0];

    let linear = NumericCost::linear_regression();
    let errors = linear.errors(y.view(), p.view());
    assert_eq!(errors, array![-1.0, 1.0]);
    let activated = &errors + &y;
    assert_abs_diff_eq!(linear.cost(y.view(), activated.view()), 1.0);

    let logistic = NumericCost::logistic_regression();
    let errors = logistic.errors(array![1.0].view(), array![0.0].view());
    assert_abs_diff_eq!(errors[0], -0.5);
}

#[test]
fn test_numeric_cost_custom_closure() {
    let cost = NumericCost::new(linear_error, |y, p| {
        (&p - &y).mapv(f64::abs).sum() / y.len() as f64
    });
    let y = array![0.0, 0.0];
    let p = array![1.0, -3.0];
    assert_abs_diff_eq!(cost.cost(y.view(), p.view()), 2.0);
}

#[test]
fn test_closed_form_squared_error() {
    let cost = ClosedFormCost::squared_error();
    let t = array![1.0, 2.0];
    let x = array![3.0, 1.0];
    // θ·x = 5，y = 4
    assert_abs_diff_eq!(cost.value(t.view(), x.view(), 4.0), 1.0);
    assert_abs_diff_eq!(cost.partial(0, t.view(), x.view(), 4.0), 6.0);
    assert_abs_diff_eq!(cost.partial(1, t.view(), x.view(), 4.0), 2.0);
    assert_eq!(cost.arity(), None);
    assert_eq!(ClosedFormCost::squared_error().with_arity(2).arity(), Some(2));
}

#[test]
fn test_closed_form_logistic_partial_matches_finite_difference() {
    let cost = ClosedFormCost::logistic();
    let x = array![1.0, -2.0];
    let y = 1.0;
    let h = 1e-6;
    for j in 0..2 {
        let mut plus = array![0.3, 0.1];
        let mut minus = plus.clone();
        plus[j] += h;
        minus[j] -= h;
        let numeric = (cost.value(plus.view(), x.view(), y) - cost.value(minus.view(), x.view(), y))
            / (2.0 * h);
        let t = array![0.3, 0.1];
        assert_abs_diff_eq!(cost.partial(j, t.view(), x.view(), y), numeric, epsilon = 1e-6);
    }
}

#[test]
fn test_mean_value_and_partial() {
    let cost = ClosedFormCost::squared_error();
    let t = array![1.0];
    let x = array![[1.0], [2.0]];
    let y = array![2.0, 4.0];
    // 残差 -1, -2
    assert_abs_diff_eq!(cost.mean_value(t.view(), x.view(), y.view()), 2.5);
    // (2*-1*1 + 2*-2*2) / 2
    assert_abs_diff_eq!(cost.mean_partial(0, t.view(), x.view(), y.view()), -5.0);
}
