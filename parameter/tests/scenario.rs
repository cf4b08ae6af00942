//! End-to-end scenarios through the public API.

use std::sync::Arc;

use regnet_parameter::{Error, NodeSignature, ParameterGraph};

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn two_input_single_output_node() {
    let network = Arc::new(vec![NodeSignature::new(2, 1, vec![2], false)]);
    let provider = |_: &NodeSignature| Some(codes(&["0", "1", "2", "3"]));
    let graph = ParameterGraph::new(network, &provider).unwrap();

    assert_eq!(graph.fixed_order_size(), 4);
    assert_eq!(graph.reorderings(), 1);
    assert_eq!(graph.size(), 4);

    let p = graph.parameter(2).unwrap();
    assert_eq!(p.logic()[0].hex(), "2");
    assert_eq!(p.order()[0].index(), 0);
    assert_eq!(graph.index(&p).unwrap(), 2);
    assert_eq!(graph.adjacencies(2).unwrap(), vec![0, 3]);

    assert!(graph.parameter(3).is_ok());
    assert!(matches!(
        graph.parameter(4),
        Err(Error::IndexOutOfRange { index: 4, size: 4 })
    ));
    assert!(matches!(
        graph.parameter(5),
        Err(Error::IndexOutOfRange { index: 5, size: 4 })
    ));
}

/// A repressilator-like cycle where each node has one input and one output,
/// plus a hub with three inputs in two groups and two outputs.
#[test]
fn cycle_with_hub() {
    let single = NodeSignature::new(1, 1, vec![1], false);
    let hub = NodeSignature::new(3, 2, vec![2, 1], true);
    let network = Arc::new(vec![single.clone(), single.clone(), single, hub]);
    let provider = |sig: &NodeSignature| match sig.inputs {
        1 => Some(codes(&["0", "4", "C"])),
        3 => Some(codes(&["00", "80", "A8", "C0", "E8", "EA", "FE"])),
        _ => None,
    };
    let graph = ParameterGraph::new(network, &provider).unwrap();

    assert_eq!(graph.fixed_order_size(), 3 * 3 * 3 * 7);
    assert_eq!(graph.reorderings(), 2);
    assert_eq!(graph.to_string(), "(ParameterGraph: 378 parameters, 4 nodes)");

    let mut edges = 0;
    for i in 0..graph.size() {
        let adj = graph.adjacencies(i).unwrap();
        assert!(!adj.contains(&i));
        edges += adj.len();
    }
    // Every edge was counted from both ends.
    assert_eq!(edges % 2, 0);
}

#[test]
fn provider_failure_names_the_signature() {
    let network = Arc::new(vec![NodeSignature::new(2, 2, vec![1, 1], true)]);
    let provider = |_: &NodeSignature| -> Option<Vec<String>> { None };
    let err = ParameterGraph::new(network, &provider).unwrap_err();
    assert!(err.to_string().contains("2_2_1_1_E"), "{err}");
    assert!(std::error::Error::source(&err).is_some());
}
