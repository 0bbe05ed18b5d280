// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::ec2_utils::PeeringPlan;

mod cli;
mod error;
mod state;

pub use cli::{Cli, ProvisionConfig};
pub use error::{ProvisionError, ProvisionResult};
pub use state::STATE;

pub async fn run(
    unique_id: String,
    config: &ProvisionConfig,
    aws_config: &aws_types::SdkConfig,
) -> ProvisionResult<()> {
    let ec2_client = aws_sdk_ec2::Client::new(aws_config);

    let plan = PeeringPlan::new(config, unique_id);
    let vpc_id = plan.provision(&ec2_client).await?;

    println!("Peering [{}] - [{}] success", vpc_id, config.target_vpc_id);
    Ok(())
}
