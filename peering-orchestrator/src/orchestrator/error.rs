// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub type ProvisionResult<T, E = ProvisionError> = Result<T, E>;

#[derive(Debug)]
pub enum ProvisionError {
    Ec2 { dbg: String },
    // a VPC is expected to always have a main route table; surfaced as a
    // distinct outcome rather than an out-of-bounds lookup
    MainRouteTableNotFound { vpc_id: String },
}

impl std::fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionError::Ec2 { dbg } => write!(f, "{}", dbg),
            ProvisionError::MainRouteTableNotFound { vpc_id } => {
                write!(f, "no main route table found for vpc: {}", vpc_id)
            }
        }
    }
}

impl std::error::Error for ProvisionError {}
