use clap::Parser;

use s3cost::cli::estimate_cmd;
use s3cost::cli::output::OutputOptions;

#[derive(Parser)]
#[command(
    name = "s3-usage-estimate",
    about = "Estimate monthly S3 storage costs from CloudWatch metrics",
    version
)]
struct Cli {
    /// The name of the S3 bucket
    #[arg(long)]
    bucket: String,

    /// AWS region the bucket lives in
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// AWS CLI profile to use
    #[arg(long)]
    profile: Option<String>,

    /// Emit the report as JSON instead of a table
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
    estimate_cmd::run(cli.bucket, cli.region, cli.profile, &opts).await
}
