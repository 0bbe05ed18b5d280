// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub const STATE: State = State {
    version: "v1.0.0",

    // aws
    region: "ap-southeast-1",
    default_route_cidr: "0.0.0.0/0",
};

pub struct State {
    pub version: &'static str,

    // aws
    pub region: &'static str,
    pub default_route_cidr: &'static str,
}

impl State {
    pub fn vpc_name(&self, unique_id: &str) -> String {
        format!("peered-vpc_{}", unique_id)
    }

    pub fn subnet_name(&self, unique_id: &str) -> String {
        format!("public-subnet_{}", unique_id)
    }
}
