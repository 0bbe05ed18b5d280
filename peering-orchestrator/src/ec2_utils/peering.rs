// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ec2_utils::{
        api::Ec2Api,
        networking,
        types::{Az, CidrBlock, VpcId},
    },
    orchestrator::{ProvisionConfig, ProvisionResult},
};
use tracing::{debug, info};

// The full provisioning sequence for one run.
//
// Strictly ordered, one remote call at a time, no rollback: a failure part
// way through leaves the resources created so far behind.
#[derive(Clone, Debug)]
pub struct PeeringPlan {
    pub vpc_cidr: CidrBlock,
    pub subnet_cidr: CidrBlock,
    pub subnet_availability_zone: Az,
    pub target_vpc_id: VpcId,
    pub unique_id: String,
}

impl PeeringPlan {
    pub fn new(config: &ProvisionConfig, unique_id: String) -> Self {
        PeeringPlan {
            vpc_cidr: config.vpc_cidr.clone(),
            subnet_cidr: config.subnet_cidr.clone(),
            subnet_availability_zone: config.subnet_availability_zone.clone(),
            target_vpc_id: config.target_vpc_id.clone(),
            unique_id,
        }
    }

    // Create the VPC and its public subnet, peer it with the target VPC and
    // route each side at the other's CIDR.
    pub async fn provision(&self, ec2: &impl Ec2Api) -> ProvisionResult<VpcId> {
        debug!("{:?}", self);

        let vpc_id = ec2.create_vpc(&self.vpc_cidr, &self.unique_id).await?;
        info!("created vpc {vpc_id}");
        println!("[OK] vpc [{}] created", vpc_id);

        networking::create_public_subnet(
            ec2,
            &vpc_id,
            &self.subnet_cidr,
            &self.subnet_availability_zone,
            &self.unique_id,
        )
        .await?;

        let peering_id = ec2
            .create_vpc_peering_connection(&vpc_id, &self.target_vpc_id)
            .await?;
        // same-account peering, so the accept can be issued immediately
        ec2.accept_vpc_peering_connection(&peering_id).await?;
        info!("peering connection {peering_id} accepted");

        let main_route_table_id = ec2.describe_main_route_table(&vpc_id).await?;
        let target_vpc_cidr = ec2.vpc_cidr(&self.target_vpc_id).await?;

        ec2.create_peering_route(&main_route_table_id, &target_vpc_cidr, &peering_id)
            .await?;

        let target_route_table_id = ec2.describe_main_route_table(&self.target_vpc_id).await?;

        ec2.create_peering_route(&target_route_table_id, &self.vpc_cidr, &peering_id)
            .await?;
        info!("routes created for {vpc_id} <-> {}", self.target_vpc_id);

        Ok(vpc_id)
    }
}
