use clap::Parser;

use s3cost::cli::cost_cmd;
use s3cost::cli::output::OutputOptions;

#[derive(Parser)]
#[command(
    name = "s3-cost-check",
    about = "Aggregate S3 costs for tagged buckets via Cost Explorer",
    version
)]
struct Cli {
    /// S3 bucket names to aggregate costs for
    #[arg(long = "buckets", required = true, num_args = 1..)]
    buckets: Vec<String>,

    /// Number of days to look back
    #[arg(long, default_value_t = 30)]
    days: i64,

    /// AWS CLI profile to use
    #[arg(long)]
    profile: Option<String>,

    /// Emit the report as JSON instead of tables
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let opts = OutputOptions::from_flags(cli.json, cli.no_color);
    cost_cmd::run(cli.buckets, cli.days, cli.profile, &opts).await
}
