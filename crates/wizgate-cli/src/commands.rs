use crate::cli::{Cli, Command};
use serde::Serialize;
use serde_json::json;
use std::{collections::BTreeMap, fmt::Write as _, fs, path::Path};
use thiserror::Error as ThisError;
use wizgate_core::{
    config::{
        Config,
        schema::{RouteConfig, TargetRule},
    },
    domain::policy::{
        gate::{GateTarget, StepGateReport, WizardGate},
        requirements::{HostRequirements, requirements_for},
    },
    ids::{ValidationGroup, ValidationId, WizardStepId},
    log,
    log::Topic,
    model::{ClusterRecord, ValidationsInfo},
    workflow::navigator::{WizardFlow, WizardNavigator},
};

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] wizgate_core::Error),
}

impl CliError {
    /// 2 for unusable input files, 1 for everything else.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Read { .. } | Self::Decode { .. } => 2,
            Self::Encode(_) | Self::Core(_) => 1,
        }
    }
}

pub fn run(cli: &Cli) -> Result<String, CliError> {
    let config = load_config(cli.config.as_deref())?;
    log::set_min_level(config.model().log.level);

    match &cli.command {
        Command::Steps { flow } => steps((*flow).into(), cli.json),
        Command::Check { cluster, step } => {
            let cluster = read_cluster(cluster)?;
            check(
                &config.gate(),
                config.route(),
                &cluster,
                parse_step(step)?,
                cli.json,
            )
        }
        Command::Filter {
            cluster,
            step,
            target,
        } => {
            let cluster = read_cluster(cluster)?;
            filter(
                &config.gate(),
                &cluster,
                parse_step(step)?,
                (*target).into(),
                cli.json,
            )
        }
        Command::Requirements {
            cluster,
            requirements,
        } => {
            let cluster = read_cluster(cluster)?;
            let requirements = match requirements {
                Some(path) => read_json(path)?,
                None => HostRequirements::default(),
            };
            describe_requirements(&cluster, &requirements, cli.json)
        }
        Command::Config => show_config(&config, cli.json),
    }
}

///
/// Input
///

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let raw = read_file(path)?;
    let config = Config::from_toml(&raw).map_err(wizgate_core::Error::from)?;
    log!(Topic::Config, Info, "loaded config from {}", path.display());

    Ok(config)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = read_file(path)?;

    serde_json::from_str(&raw).map_err(|source| CliError::Decode {
        path: path.display().to_string(),
        source,
    })
}

fn read_cluster(path: &Path) -> Result<ClusterRecord, CliError> {
    read_json(path)
}

fn parse_step(step: &str) -> Result<WizardStepId, CliError> {
    step.parse::<WizardStepId>()
        .map_err(|err| CliError::Core(err.into()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

///
/// Commands
///

fn steps(flow: WizardFlow, as_json: bool) -> Result<String, CliError> {
    let nav = WizardNavigator::new(flow);

    if as_json {
        return to_json(&json!({
            "flow": flow,
            "first": nav.current(),
            "steps": nav.steps(),
        }));
    }

    let mut out = String::new();
    for step in nav.steps() {
        let marker = if *step == nav.current() { "*" } else { " " };
        let _ = writeln!(out, "{marker} {step}");
    }

    Ok(out.trim_end().to_string())
}

fn check(
    gate: &WizardGate,
    route: &RouteConfig,
    cluster: &ClusterRecord,
    step: WizardStepId,
    as_json: bool,
) -> Result<String, CliError> {
    let report = gate
        .report(cluster, step)
        .map_err(wizgate_core::Error::from)?;

    log!(
        Topic::Gate,
        Debug,
        "cluster {} at '{step}': can_advance={}",
        cluster.id,
        report.can_advance
    );

    if as_json {
        return to_json(&report);
    }

    Ok(render_report(cluster, &report, route))
}

fn render_report(cluster: &ClusterRecord, report: &StepGateReport, route: &RouteConfig) -> String {
    let name = cluster.name.as_deref().unwrap_or(&cluster.id);
    let mut out = String::new();

    let _ = writeln!(out, "step: {}", report.step);
    let _ = writeln!(out, "link: {}", route.cluster_path(&cluster.id));
    let _ = writeln!(
        out,
        "cluster {name}: {} -> {} ({})",
        report.status,
        report.step_status,
        report.step_status.label()
    );
    for host in &report.hosts {
        let _ = writeln!(
            out,
            "  host {}: {} -> {} ({})",
            host.hostname,
            host.status,
            host.step_status,
            host.step_status.label()
        );
    }
    let _ = write!(
        out,
        "can advance: {}",
        if report.can_advance { "yes" } else { "no" }
    );

    out
}

fn filter(
    gate: &WizardGate,
    cluster: &ClusterRecord,
    step: WizardStepId,
    target: GateTarget,
    as_json: bool,
) -> Result<String, CliError> {
    let sections: Vec<(String, ValidationsInfo)> = match target {
        GateTarget::Cluster => vec![(
            cluster.id.clone(),
            gate.filter_validations(&cluster.validations(), step, target)
                .map_err(wizgate_core::Error::from)?,
        )],
        GateTarget::Host => cluster
            .hosts
            .iter()
            .map(|host| {
                gate.filter_validations(&host.validations(), step, target)
                    .map(|info| (host.id.clone(), info))
                    .map_err(|err| CliError::Core(err.into()))
            })
            .collect::<Result<_, _>>()?,
    };

    if as_json {
        let map: serde_json::Map<String, serde_json::Value> = sections
            .into_iter()
            .map(|(id, info)| serde_json::to_value(info).map(|value| (id, value)))
            .collect::<Result<_, serde_json::Error>>()?;

        return to_json(&map);
    }

    let mut out = String::new();
    for (id, info) in &sections {
        let _ = writeln!(out, "{id}:");
        if info.is_empty() {
            let _ = writeln!(out, "  (nothing relevant to {step})");
        }
        for (group, entries) in info.groups() {
            let _ = writeln!(out, "  [{group}]");
            for entry in entries {
                let message = entry.message.as_deref().unwrap_or("");
                let _ = writeln!(
                    out,
                    "    {:<32} {:<8} {message}",
                    entry.id.as_str(),
                    entry.status.to_string()
                );
            }
        }
    }

    Ok(out.trim_end().to_string())
}

fn describe_requirements(
    cluster: &ClusterRecord,
    requirements: &HostRequirements,
    as_json: bool,
) -> Result<String, CliError> {
    let content = requirements_for(cluster);
    let text = content.describe(requirements);

    if as_json {
        return to_json(&json!({
            "single_node": cluster.is_single_node(),
            "required_hosts": content.required_hosts(),
            "text": text,
        }));
    }

    Ok(text)
}

fn show_config(config: &Config, as_json: bool) -> Result<String, CliError> {
    let gate = config.gate();

    if as_json {
        let rules: BTreeMap<String, _> = gate
            .rules()
            .iter()
            .map(|(step, rule)| (step.to_string(), rule))
            .collect();

        return to_json(&json!({
            "config": config.model(),
            "effective_rules": rules,
        }));
    }

    let mut out = config
        .to_toml()
        .map_err(|err| CliError::Core(err.into()))?;

    let _ = write!(out, "\n# effective rules");
    for (step, rule) in gate.rules().iter() {
        let _ = write!(out, "\n# {step}.cluster {}", describe_target(&rule.cluster));
        let _ = write!(out, "\n# {step}.host {}", describe_target(&rule.host));
    }

    Ok(out)
}

fn describe_target(rule: &TargetRule) -> String {
    let groups: Vec<&str> = rule.groups.iter().map(ValidationGroup::as_str).collect();
    let ids: Vec<&str> = rule.validation_ids.iter().map(ValidationId::as_str).collect();

    format!("groups=[{}] ids=[{}]", groups.join(", "), ids.join(", "))
}

///
/// TESTS
///
