//! Building parameter graphs from a network file and a catalog directory.

use std::fs;
use std::sync::Arc;

use regnet_catalog::{DirectoryCatalog, NetworkDescription};
use regnet_parameter::{Error, ParameterGraph};

const NETWORK: &str = r#"{
    "nodes": [
        { "name": "X", "inputs": 2, "outputs": 1, "logic": [2] },
        { "name": "Y", "inputs": 1, "outputs": 2 }
    ]
}"#;

#[test]
fn graph_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("network.json"), NETWORK).unwrap();
    fs::write(dir.path().join("2_1_2.dat"), "0\n1\n2\n3\n").unwrap();
    fs::write(dir.path().join("1_2_1.dat"), "0\n8\nC\n").unwrap();

    let network = NetworkDescription::from_path(dir.path().join("network.json")).unwrap();
    let catalogs = DirectoryCatalog::new(dir.path());
    let graph = ParameterGraph::new(Arc::new(network), &catalogs).unwrap();

    assert_eq!(graph.fixed_order_size(), 12);
    assert_eq!(graph.reorderings(), 2);
    assert_eq!(graph.size(), 24);
    assert_eq!(graph.network().name(1), Some("Y"));

    let p = graph.parameter(13).unwrap();
    // 13 = 1·12 + 1: logic digits (1, 0), order digits (0, 1).
    assert_eq!(p.logic()[0].hex(), "1");
    assert_eq!(p.logic()[1].hex(), "0");
    assert_eq!(p.order()[1].permutation(), vec![1, 0]);
    assert_eq!(graph.index(&p).unwrap(), 13);
}

#[test]
fn missing_resource_aborts_construction() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("2_1_2.dat"), "0\n1\n2\n3\n").unwrap();

    let network = NetworkDescription::from_json_str(NETWORK).unwrap();
    let catalogs = DirectoryCatalog::new(dir.path());
    let err = ParameterGraph::new(Arc::new(network), &catalogs).unwrap_err();
    match err {
        Error::ResourceNotFound { node, source, .. } => {
            assert_eq!(node, 1);
            assert!(source.to_string().contains("1_2_1.dat"), "{source}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn lowercase_resource_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("2_1_2.dat"), "0\na\n").unwrap();
    fs::write(dir.path().join("1_2_1.dat"), "0\n").unwrap();

    let network = NetworkDescription::from_json_str(NETWORK).unwrap();
    let err = ParameterGraph::new(Arc::new(network), &DirectoryCatalog::new(dir.path()))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedCatalog { node: 0, .. }), "{err}");
}
