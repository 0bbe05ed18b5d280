// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ec2_utils::types::{
        Az, CidrBlock, InternetGatewayId, PeeringConnectionId, RouteTableId, SubnetId, VpcId,
    },
    orchestrator::{ProvisionError, ProvisionResult, STATE},
};
use async_trait::async_trait;
use aws_sdk_ec2::types::{Filter, ResourceType, Tag, TagSpecification, Tenancy};

/// One method per remote EC2 call issued by the provisioning sequence.
///
/// The sequencers are generic over this trait so tests can substitute an
/// in-memory fake for the real client.
#[async_trait]
pub trait Ec2Api {
    async fn create_vpc(&self, cidr: &CidrBlock, unique_id: &str) -> ProvisionResult<VpcId>;

    async fn create_subnet(
        &self,
        vpc_id: &VpcId,
        cidr: &CidrBlock,
        az: &Az,
        unique_id: &str,
    ) -> ProvisionResult<SubnetId>;

    async fn create_internet_gateway(&self) -> ProvisionResult<InternetGatewayId>;

    async fn attach_internet_gateway(
        &self,
        igw_id: &InternetGatewayId,
        vpc_id: &VpcId,
    ) -> ProvisionResult<()>;

    /// Look up the main route table for a VPC (association.main = true).
    ///
    /// Errs with `MainRouteTableNotFound` when the describe result is empty.
    async fn describe_main_route_table(&self, vpc_id: &VpcId) -> ProvisionResult<RouteTableId>;

    async fn associate_route_table(
        &self,
        route_table_id: &RouteTableId,
        subnet_id: &SubnetId,
    ) -> ProvisionResult<()>;

    async fn create_gateway_route(
        &self,
        route_table_id: &RouteTableId,
        destination: &CidrBlock,
        igw_id: &InternetGatewayId,
    ) -> ProvisionResult<()>;

    async fn create_peering_route(
        &self,
        route_table_id: &RouteTableId,
        destination: &CidrBlock,
        peering_id: &PeeringConnectionId,
    ) -> ProvisionResult<()>;

    async fn create_vpc_peering_connection(
        &self,
        vpc_id: &VpcId,
        peer_vpc_id: &VpcId,
    ) -> ProvisionResult<PeeringConnectionId>;

    async fn accept_vpc_peering_connection(
        &self,
        peering_id: &PeeringConnectionId,
    ) -> ProvisionResult<()>;

    async fn vpc_cidr(&self, vpc_id: &VpcId) -> ProvisionResult<CidrBlock>;
}

fn name_tag(resource_type: ResourceType, name: String) -> TagSpecification {
    TagSpecification::builder()
        .resource_type(resource_type)
        .tags(Tag::builder().key("Name").value(name).build())
        .build()
}

#[async_trait]
impl Ec2Api for aws_sdk_ec2::Client {
    async fn create_vpc(&self, cidr: &CidrBlock, unique_id: &str) -> ProvisionResult<VpcId> {
        let resp = self
            .create_vpc()
            .cidr_block(cidr.as_str())
            .amazon_provided_ipv6_cidr_block(false)
            .instance_tenancy(Tenancy::Default)
            .tag_specifications(name_tag(ResourceType::Vpc, STATE.vpc_name(unique_id)))
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to create vpc: {err}"),
            })?;

        let vpc_id = resp
            .vpc()
            .and_then(|vpc| vpc.vpc_id())
            .ok_or(ProvisionError::Ec2 {
                dbg: "Created vpc has no id".to_string(),
            })?;
        Ok(VpcId::from(vpc_id))
    }

    async fn create_subnet(
        &self,
        vpc_id: &VpcId,
        cidr: &CidrBlock,
        az: &Az,
        unique_id: &str,
    ) -> ProvisionResult<SubnetId> {
        let resp = self
            .create_subnet()
            .vpc_id(vpc_id.as_str())
            .cidr_block(cidr.as_str())
            .availability_zone(az.as_str())
            .tag_specifications(name_tag(ResourceType::Subnet, STATE.subnet_name(unique_id)))
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to create subnet: {err}"),
            })?;

        let subnet_id = resp
            .subnet()
            .and_then(|subnet| subnet.subnet_id())
            .ok_or(ProvisionError::Ec2 {
                dbg: "Created subnet has no id".to_string(),
            })?;
        Ok(SubnetId::from(subnet_id))
    }

    async fn create_internet_gateway(&self) -> ProvisionResult<InternetGatewayId> {
        let resp = self
            .create_internet_gateway()
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to create internet gateway: {err}"),
            })?;

        let igw_id = resp
            .internet_gateway()
            .and_then(|igw| igw.internet_gateway_id())
            .ok_or(ProvisionError::Ec2 {
                dbg: "Created internet gateway has no id".to_string(),
            })?;
        Ok(InternetGatewayId::from(igw_id))
    }

    async fn attach_internet_gateway(
        &self,
        igw_id: &InternetGatewayId,
        vpc_id: &VpcId,
    ) -> ProvisionResult<()> {
        self.attach_internet_gateway()
            .internet_gateway_id(igw_id.as_str())
            .vpc_id(vpc_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to attach internet gateway: {err}"),
            })?;
        Ok(())
    }

    async fn describe_main_route_table(&self, vpc_id: &VpcId) -> ProvisionResult<RouteTableId> {
        let resp = self
            .describe_route_tables()
            .filters(
                Filter::builder()
                    .name("association.main")
                    .values("true")
                    .build(),
            )
            .filters(Filter::builder().name("vpc-id").values(vpc_id.as_str()).build())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to describe route tables: {err}"),
            })?;

        let route_table_id = resp
            .route_tables()
            .first()
            .and_then(|table| table.route_table_id())
            .ok_or(ProvisionError::MainRouteTableNotFound {
                vpc_id: vpc_id.as_string(),
            })?;
        Ok(RouteTableId::from(route_table_id))
    }

    async fn associate_route_table(
        &self,
        route_table_id: &RouteTableId,
        subnet_id: &SubnetId,
    ) -> ProvisionResult<()> {
        self.associate_route_table()
            .route_table_id(route_table_id.as_str())
            .subnet_id(subnet_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to associate route table: {err}"),
            })?;
        Ok(())
    }

    async fn create_gateway_route(
        &self,
        route_table_id: &RouteTableId,
        destination: &CidrBlock,
        igw_id: &InternetGatewayId,
    ) -> ProvisionResult<()> {
        self.create_route()
            .route_table_id(route_table_id.as_str())
            .destination_cidr_block(destination.as_str())
            .gateway_id(igw_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to create gateway route: {err}"),
            })?;
        Ok(())
    }

    async fn create_peering_route(
        &self,
        route_table_id: &RouteTableId,
        destination: &CidrBlock,
        peering_id: &PeeringConnectionId,
    ) -> ProvisionResult<()> {
        self.create_route()
            .route_table_id(route_table_id.as_str())
            .destination_cidr_block(destination.as_str())
            .vpc_peering_connection_id(peering_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to create peering route: {err}"),
            })?;
        Ok(())
    }

    async fn create_vpc_peering_connection(
        &self,
        vpc_id: &VpcId,
        peer_vpc_id: &VpcId,
    ) -> ProvisionResult<PeeringConnectionId> {
        let resp = self
            .create_vpc_peering_connection()
            .vpc_id(vpc_id.as_str())
            .peer_vpc_id(peer_vpc_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to create peering connection: {err}"),
            })?;

        let peering_id = resp
            .vpc_peering_connection()
            .and_then(|peering| peering.vpc_peering_connection_id())
            .ok_or(ProvisionError::Ec2 {
                dbg: "Created peering connection has no id".to_string(),
            })?;
        Ok(PeeringConnectionId::from(peering_id))
    }

    async fn accept_vpc_peering_connection(
        &self,
        peering_id: &PeeringConnectionId,
    ) -> ProvisionResult<()> {
        self.accept_vpc_peering_connection()
            .vpc_peering_connection_id(peering_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to accept peering connection: {err}"),
            })?;
        Ok(())
    }

    async fn vpc_cidr(&self, vpc_id: &VpcId) -> ProvisionResult<CidrBlock> {
        let resp = self
            .describe_vpcs()
            .vpc_ids(vpc_id.as_str())
            .send()
            .await
            .map_err(|err| ProvisionError::Ec2 {
                dbg: format!("Failed to describe vpc: {err}"),
            })?;

        let cidr = resp
            .vpcs()
            .first()
            .and_then(|vpc| vpc.cidr_block())
            .ok_or(ProvisionError::Ec2 {
                dbg: format!("No cidr block found for vpc: {vpc_id}"),
            })?;
        Ok(CidrBlock::from(cidr))
    }
}
