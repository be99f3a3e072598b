//! End-to-end pruning of a convolution-shaped weight through the public API.

use approx::assert_abs_diff_eq;
use ndarray::{Array, ArrayD, Axis, IxDyn};
use recortar::{top_x_perc_norm, Module, PruningMethod, PruningType, TopXConfig};

/// Eight output channels of 3x3x3 filters; channel `c` is filled with `c`
/// except for one large spike in channel 1.
fn conv_weight() -> ArrayD<f32> {
    let mut w = Array::from_shape_fn(IxDyn(&[8, 3, 3, 3]), |idx| idx[0] as f32 * 0.1);
    w[IxDyn(&[1, 2, 2, 2])] = -50.0;
    w
}

#[test]
fn test_scores_for_conv_weight() {
    let w = conv_weight();
    let scores = top_x_perc_norm(w.view(), 10.0).unwrap();
    // 27 elements per filter, 10% keeps 3.
    assert_eq!(scores.len(), 8);
    assert_abs_diff_eq!(scores[0], 0.0);
    assert_abs_diff_eq!(scores[1], 50.2, epsilon = 1e-4);
    assert_abs_diff_eq!(scores[7], 2.1, epsilon = 1e-4);
}

#[test]
fn test_config_driven_pruning_round_trip() {
    let config = TopXConfig::from_yaml("amount: 0.5\nx: 10.0\ndim: 0\n").unwrap();
    let method = config.build().unwrap();
    assert_eq!(method.pruning_type(), PruningType::Structured);

    let mut module = Module::new().with_parameter("conv.weight", conv_weight());
    module.prune_parameter("conv.weight", &method, None).unwrap();

    let mask = module.parameter("conv.weight").unwrap().mask().unwrap().clone();
    assert_eq!(mask.pruned_slices(0), vec![0, 2, 3, 4]);
    assert_abs_diff_eq!(mask.sparsity(), 0.5);

    // A second, stricter round composes with the first.
    let stricter = config.with_amount(0.75).build().unwrap();
    module.prune_parameter("conv.weight", &stricter, None).unwrap();
    let mask = module.parameter("conv.weight").unwrap().mask().unwrap();
    assert_eq!(mask.pruned_slices(0), vec![0, 2, 3, 4, 5, 6]);

    module.remove_pruning("conv.weight").unwrap();
    let committed = module.parameter("conv.weight").unwrap().original();
    for (c, filter) in committed.axis_iter(Axis(0)).enumerate() {
        let zeroed = filter.iter().all(|&v| v == 0.0);
        assert_eq!(zeroed, ![1, 7].contains(&c), "channel {c}");
    }
}
