use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wizgate_core::prelude::*;

fn validations(groups: &[(&str, &[&str])]) -> String {
    let body: Vec<String> = groups
        .iter()
        .map(|(group, ids)| {
            let entries: Vec<String> = ids
                .iter()
                .map(|id| format!(r#"{{"id":"{id}","status":"success"}}"#))
                .collect();
            format!(r#""{group}":[{}]"#, entries.join(","))
        })
        .collect();

    format!("{{{}}}", body.join(","))
}

fn cluster_with_hosts(count: usize) -> ClusterRecord {
    let host_info = validations(&[
        ("hardware", &["has-cpu-cores", "has-memory", "has-min-valid-disks"]),
        ("network", &["connected", "container-images-available", "ntp-synced"]),
    ]);

    ClusterRecord {
        id: "bench".to_string(),
        name: None,
        status: ClusterStatus::Insufficient,
        high_availability_mode: Default::default(),
        validations_info: Some(validations(&[
            ("configuration", &["pull-secret-set", "dns-domain-defined"]),
            ("operators", &["ocs-requirements-satisfied"]),
            ("network", &["api-vip-defined", "ingress-vip-defined"]),
        ])),
        hosts: (0..count)
            .map(|i| HostRecord {
                id: format!("host-{i}"),
                requested_hostname: None,
                status: HostStatus::Insufficient,
                validations_info: Some(host_info.clone()),
            })
            .collect(),
    }
}

fn bench_can_advance(c: &mut Criterion) {
    let gate = WizardGate::default();
    let cluster = cluster_with_hosts(120);

    c.bench_function("can_advance baremetal-discovery / 120 hosts", |b| {
        b.iter(|| {
            let ok = gate
                .can_advance(black_box(&cluster), WizardStepId::BaremetalDiscovery)
                .unwrap();
            black_box(ok)
        });
    });
}

criterion_group!(benches, bench_can_advance);
criterion_main!(benches);
