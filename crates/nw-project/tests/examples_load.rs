use std::path::Path;

#[test]
fn examples_load_and_check() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../networks");
    let examples = ["01_connected.yaml", "02_split.yaml"];

    for name in examples {
        let path = root.join(name);
        let def = nw_project::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        let outcomes = nw_project::check_queries(&def)
            .unwrap_or_else(|e| panic!("Failed to check {}: {}", name, e));
        assert!(!outcomes.is_empty(), "{} declares no queries", name);
        for outcome in outcomes {
            assert!(
                outcome.matches(),
                "{}: query {} -> {} gave {}",
                name,
                outcome.source,
                outcome.target,
                outcome.reachable
            );
        }
    }
}

#[test]
fn split_example_is_sparse() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../networks/02_split.yaml");
    let def = nw_project::load_yaml(&path).unwrap();
    let network = nw_project::build_network(&def).unwrap();
    assert_eq!(network.representation(), nw_project::Representation::Sparse);
    assert_eq!(network.node_count(), 8);
    assert_eq!(network.edge_count(), 7);
    assert!(!network.query(2, 6).unwrap());
}
