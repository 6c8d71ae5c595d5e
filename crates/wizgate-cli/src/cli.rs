use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wizgate_core::{domain::policy::gate::GateTarget, workflow::navigator::WizardFlow};

#[derive(Parser)]
#[command(name = "wizgate")]
#[command(version, about = "Inspect cluster installation wizard step gating")]
#[command(
    after_help = "Cluster files are JSON records as returned by the provisioning API.\nStep ids: cluster-details, baremetal-discovery, networking, review"
)]
pub struct Cli {
    /// TOML file with log, route and rule overrides
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the wizard step order and the first step for a flow
    Steps {
        #[arg(long, value_enum, default_value_t = FlowArg::Existing)]
        flow: FlowArg,
    },
    /// Derive host and cluster status for a step and report whether it may advance
    Check {
        #[arg(long)]
        cluster: PathBuf,
        #[arg(long)]
        step: String,
    },
    /// Print the validations relevant to a step
    Filter {
        #[arg(long)]
        cluster: PathBuf,
        #[arg(long)]
        step: String,
        #[arg(long, value_enum, default_value_t = TargetArg::Cluster)]
        target: TargetArg,
    },
    /// Describe host requirements for the cluster's topology
    Requirements {
        #[arg(long)]
        cluster: PathBuf,
        /// JSON with master/worker minimums reported by the API
        #[arg(long)]
        requirements: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FlowArg {
    Existing,
    New,
}

impl From<FlowArg> for WizardFlow {
    fn from(value: FlowArg) -> Self {
        match value {
            FlowArg::Existing => Self::Existing,
            FlowArg::New => Self::New,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TargetArg {
    Cluster,
    Host,
}

impl From<TargetArg> for GateTarget {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::Cluster => Self::Cluster,
            TargetArg::Host => Self::Host,
        }
    }
}
