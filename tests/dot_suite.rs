use k8sdot::{DotGraph, GraphError, IconError, IconMode, Manifest, RenderOptions};
use std::path::Path;

const MANIFEST: &str = r#"{
    "namespace": "shop",
    "resources": [
        {"kind": "ing", "name": "storefront"},
        {"kind": "svc", "name": "web"},
        {"kind": "deploy", "name": "web"},
        {"kind": "rs", "name": "web-5d4f8",
         "owners": [{"kind": "deploy", "name": "web"}]},
        {"kind": "pod", "name": "web-5d4f8-abc",
         "owners": [{"kind": "rs", "name": "web-5d4f8"}]},
        {"kind": "pvc", "name": "web-data"}
    ]
}"#;

fn write_icon(base: &Path, kind: &str, bytes: &[u8]) {
    let icons = base.join("icons");
    std::fs::create_dir_all(&icons).unwrap();
    std::fs::write(icons.join(format!("{kind}-128.png")), bytes).unwrap();
}

#[test]
fn external_mode_generates_complete_document() {
    let manifest: Manifest = serde_json::from_str(MANIFEST).unwrap();
    let mut graph = DotGraph::new(manifest, &RenderOptions::default());
    let dot = graph.to_dot().unwrap();

    assert!(dot.starts_with("digraph G {"));
    assert!(dot.trim_end().ends_with('}'));

    // Cluster boundary and every resource node.
    assert!(dot.contains("subgraph cluster_shop {"));
    for id in [
        "ing_storefront",
        "svc_web",
        "deploy_web",
        "rs_web_5d4f8",
        "pod_web_5d4f8_abc",
        "pvc_web_data",
    ] {
        assert!(dot.contains(&format!("{id} [label=")), "missing node {id}");
    }

    // Icon references stay relative in external mode.
    assert!(dot.contains("icons/ns-128.png"));
    assert!(dot.contains("icons/pod-128.png"));
    assert!(!dot.contains("data:image/png"));

    // Ownership chain.
    assert!(dot.contains("deploy_web -> rs_web_5d4f8;"));
    assert!(dot.contains("rs_web_5d4f8 -> pod_web_5d4f8_abc;"));

    // Rank chain pins tiers top to bottom.
    for tier in 0..5 {
        assert!(dot.contains(&format!("{tier} -> {} [style=invis];", tier + 1)));
    }
    assert!(dot.contains("{rank=same; 0; ing_storefront;}"));
    assert!(dot.contains("{rank=same; 3; pod_web_5d4f8_abc;}"));
}

#[test]
fn embedded_mode_inlines_icons_once() {
    let dir = tempfile::tempdir().unwrap();
    for kind in ["ns", "ing", "svc", "deploy", "rs", "pod", "pvc"] {
        write_icon(dir.path(), kind, kind.as_bytes());
    }

    let manifest: Manifest = serde_json::from_str(MANIFEST).unwrap();
    let options = RenderOptions {
        icons_dir: dir.path().to_path_buf(),
        icon_mode: IconMode::Embedded,
    };
    let mut graph = DotGraph::new(manifest, &options);
    let dot = graph.to_dot().unwrap();

    assert!(dot.contains("data:image/png;charset=utf-8;base64,"));
    assert!(!dot.contains("SRC=\"icons/"));
}

#[test]
fn embedded_mode_fails_on_missing_icon() {
    let dir = tempfile::tempdir().unwrap();
    // Namespace icon only; the first resource kind has no icon file.
    write_icon(dir.path(), "ns", b"ns");

    let manifest: Manifest = serde_json::from_str(MANIFEST).unwrap();
    let options = RenderOptions {
        icons_dir: dir.path().to_path_buf(),
        icon_mode: IconMode::Embedded,
    };
    let mut graph = DotGraph::new(manifest, &options);
    match graph.to_dot() {
        Err(GraphError::Icon(IconError::NotFound { path })) => {
            assert!(path.ends_with("icons/ing-128.png"));
        }
        other => panic!("expected IconError::NotFound, got {other:?}"),
    }
}
