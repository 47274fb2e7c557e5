//! Common utilities for benchmarks

use confparse_core::types::{ConfigSet, Document};
use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use serde_json::json;

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// A deployment-like document with `containers` nested entries
pub fn create_document(containers: usize) -> Document {
    let containers: Vec<Document> = (0..containers)
        .map(|i| {
            json!({
                "name": format!("container-{}", i),
                "image": format!("registry.example.com/app-{}:1.{}.0", i, i),
                "ports": [8000 + i, 9000 + i],
                "env": {"LOG_LEVEL": "info", "SCRIPT": "run\r\n"},
                "privileged": i % 7 == 0
            })
        })
        .collect();

    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {"name": "bench", "labels": {"tier": "backend"}},
        "spec": {"replicas": 3, "template": {"spec": {"containers": containers}}}
    })
}

/// A configuration set of `sources` documents
pub fn create_config_set(sources: usize, containers: usize) -> ConfigSet {
    (0..sources)
        .map(|i| (format!("manifests/deploy-{:03}.yaml", i), create_document(containers)))
        .collect()
}

/// YAML text equivalent to `create_document`
pub fn create_yaml_content(containers: usize) -> String {
    let mut yaml = String::from(
        "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: bench\nspec:\n  replicas: 3\n  containers:\n",
    );
    for i in 0..containers {
        yaml.push_str(&format!(
            "    - name: container-{i}\n      image: registry.example.com/app-{i}:1.{i}.0\n      ports: [{}, {}]\n",
            8000 + i,
            9000 + i
        ));
    }
    yaml
}

/// TOML text with `containers` array-of-table entries
pub fn create_toml_content(containers: usize) -> String {
    let mut toml = String::from("kind = \"Deployment\"\nreplicas = 3\n");
    for i in 0..containers {
        toml.push_str(&format!(
            "\n[[containers]]\nname = \"container-{i}\"\nimage = \"registry.example.com/app-{i}:1.{i}.0\"\nports = [{}, {}]\n",
            8000 + i,
            9000 + i
        ));
    }
    toml
}
