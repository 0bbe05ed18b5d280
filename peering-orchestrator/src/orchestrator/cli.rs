// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ec2_utils::{Az, CidrBlock, VpcId},
    orchestrator::STATE,
};
use clap::Parser;

/// Provision a VPC with a public subnet and peer it with an existing VPC.
///
/// Creates the VPC, an internet-gateway backed public subnet, a peering
/// connection to the target VPC and the routes on both sides. Resources
/// are created once per invocation; nothing is cleaned up on failure.
#[derive(Parser, Debug)]
#[command(name = "vpc-peering")]
pub struct Cli {
    /// CIDR block for the new VPC
    vpc_cidr: String,

    /// CIDR block for the public subnet inside the new VPC
    subnet_cidr: String,

    /// Availability zone for the public subnet
    subnet_availability_zone: String,

    /// Id of the existing VPC to peer with
    target_vpc_id: String,

    /// AWS region to provision in
    #[arg(long, default_value = STATE.region)]
    region: String,
}

impl Cli {
    pub fn into_config(self) -> ProvisionConfig {
        ProvisionConfig {
            vpc_cidr: CidrBlock::from(self.vpc_cidr),
            subnet_cidr: CidrBlock::from(self.subnet_cidr),
            subnet_availability_zone: Az::from(self.subnet_availability_zone),
            target_vpc_id: VpcId::from(self.target_vpc_id),
            region: self.region,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProvisionConfig {
    pub vpc_cidr: CidrBlock,
    pub subnet_cidr: CidrBlock,
    pub subnet_availability_zone: Az,
    pub target_vpc_id: VpcId,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_arguments() {
        for args in [
            vec!["vpc-peering"],
            vec!["vpc-peering", "10.0.0.0/16"],
            vec!["vpc-peering", "10.0.0.0/16", "10.0.0.0/24"],
            vec!["vpc-peering", "10.0.0.0/16", "10.0.0.0/24", "ap-southeast-1a"],
        ] {
            assert!(Cli::try_parse_from(args).is_err());
        }
    }

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::try_parse_from([
            "vpc-peering",
            "10.0.0.0/16",
            "10.0.0.0/24",
            "ap-southeast-1a",
            "vpc-0123456789abcdef0",
        ])
        .unwrap();
        let config = cli.into_config();

        assert_eq!(config.vpc_cidr.as_string(), "10.0.0.0/16");
        assert_eq!(config.subnet_cidr.as_string(), "10.0.0.0/24");
        assert_eq!(config.subnet_availability_zone.as_string(), "ap-southeast-1a");
        assert_eq!(config.target_vpc_id.as_string(), "vpc-0123456789abcdef0");
        assert_eq!(config.region, STATE.region);
    }

    #[test]
    fn region_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "vpc-peering",
            "10.0.0.0/16",
            "10.0.0.0/24",
            "eu-west-1a",
            "vpc-0123456789abcdef0",
            "--region",
            "eu-west-1",
        ])
        .unwrap();

        assert_eq!(cli.into_config().region, "eu-west-1");
    }
}
