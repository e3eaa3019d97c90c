use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fir-intake",
    version,
    about = "Conversational First Information Report intake and drafting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Serve(ServeArgs),
    Catalog(CatalogArgs),
    Classify(ClassifyArgs),
    Draft(DraftArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CatalogSourceArgs {
    #[arg(long, env = "FIR_INTAKE_CATALOG", default_value = "data/bns_data.json")]
    pub catalog_path: PathBuf,

    #[arg(long = "keywords", env = "FIR_INTAKE_KEYWORDS")]
    pub keywords_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,

    #[arg(long, env = "FIR_INTAKE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    #[arg(long, env = "FIR_INTAKE_SESSION_TTL_SECS", default_value_t = 3600)]
    pub session_ttl_secs: u64,

    #[arg(long, env = "FIR_INTAKE_SWEEP_INTERVAL_SECS", default_value_t = 60)]
    pub sweep_interval_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,

    #[arg(long)]
    pub section: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,

    #[arg(long)]
    pub text: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,

    #[arg(long = "answers")]
    pub answers_path: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub html: Option<PathBuf>,
}
