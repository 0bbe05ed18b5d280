// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::orchestrator::{Cli, ProvisionResult, STATE};
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;

mod ec2_utils;
mod orchestrator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ProvisionResult<()> {
    let unique_id = format!(
        "{}-{}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
        STATE.version
    );

    let file_appender =
        tracing_appender::rolling::daily("./target", format!("vpc_peering_{}", unique_id));
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        // missing/extra arguments exit with status 1, before any remote call
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let config = cli.into_config();
    let region = Region::new(config.region.clone());
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    orchestrator::run(unique_id, &config, &aws_config).await
}
