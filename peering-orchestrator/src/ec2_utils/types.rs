// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

// Opaque identifiers handed back by EC2. Nothing is persisted locally; the
// ids only live long enough to be threaded into the next remote call.
macro_rules! ec2_new_types {
    ($name:ident) => {
        #[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn as_string(&self) -> String {
                self.clone().0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)?;
                Ok(())
            }
        }
    };
}

ec2_new_types!(VpcId);
ec2_new_types!(SubnetId);
ec2_new_types!(Az);
ec2_new_types!(InternetGatewayId);
ec2_new_types!(RouteTableId);
ec2_new_types!(PeeringConnectionId);
ec2_new_types!(CidrBlock);
