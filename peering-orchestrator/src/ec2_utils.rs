// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

mod api;
mod networking;
mod peering;
mod types;

pub use api::Ec2Api;
pub use peering::PeeringPlan;
pub use types::{
    Az, CidrBlock, InternetGatewayId, PeeringConnectionId, RouteTableId, SubnetId, VpcId,
};
