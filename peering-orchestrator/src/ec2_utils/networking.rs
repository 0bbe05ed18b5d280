// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ec2_utils::{
        api::Ec2Api,
        types::{Az, CidrBlock, SubnetId, VpcId},
    },
    orchestrator::{ProvisionResult, STATE},
};
use tracing::info;

// Create a public subnet inside the given VPC: internet gateway attached to
// the VPC, subnet in the requested AZ, subnet associated with the VPC's main
// route table and a default route out through the gateway.
//
// The association with the main route table is typically redundant (subnets
// fall back to it anyway) but is issued explicitly, matching the rest of the
// provisioning sequence.
pub async fn create_public_subnet(
    ec2: &impl Ec2Api,
    vpc_id: &VpcId,
    subnet_cidr: &CidrBlock,
    az: &Az,
    unique_id: &str,
) -> ProvisionResult<SubnetId> {
    let igw_id = ec2.create_internet_gateway().await?;
    info!("created internet gateway {igw_id}");

    ec2.attach_internet_gateway(&igw_id, vpc_id).await?;
    info!("attached internet gateway {igw_id} to {vpc_id}");

    let subnet_id = ec2.create_subnet(vpc_id, subnet_cidr, az, unique_id).await?;
    info!("created subnet {subnet_id} in {az}");

    let main_route_table_id = ec2.describe_main_route_table(vpc_id).await?;

    ec2.associate_route_table(&main_route_table_id, &subnet_id)
        .await?;

    ec2.create_gateway_route(
        &main_route_table_id,
        &CidrBlock::from(STATE.default_route_cidr),
        &igw_id,
    )
    .await?;
    info!("default route {} -> {igw_id}", STATE.default_route_cidr);

    println!("[OK] subnet [{}] as public subnet", subnet_id);

    Ok(subnet_id)
}
