//! Redshift operations.
//!
//! [`RedshiftOperation`] names every supported operation at runtime. Each
//! operation also has a zero-sized marker type implementing [`Operation`],
//! which ties its action name to its input and output shapes at compile time.
//! [`RedshiftOperation::visit`] bridges the two, so callers holding an
//! operation name can still run fully typed code.

use std::fmt;

use rustack_query::QueryShape;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::input::{
    CreateClusterInput, CreateClusterParameterGroupInput, CreateClusterSecurityGroupInput,
    CreateClusterSnapshotInput, CreateEventSubscriptionInput, CreateScheduledActionInput,
    CreateTagsInput, CreateUsageLimitInput, DeleteClusterInput, DescribeClusterSnapshotsInput,
    DescribeClustersInput, DescribeResizeInput, ModifyClusterInput,
    ModifyClusterParameterGroupInput, RestoreFromClusterSnapshotInput,
};
use crate::output::{
    CreateClusterOutput, CreateClusterParameterGroupOutput, CreateClusterSecurityGroupOutput,
    CreateClusterSnapshotOutput, CreateEventSubscriptionOutput, CreateScheduledActionOutput,
    CreateTagsOutput, CreateUsageLimitOutput, DeleteClusterOutput, DescribeClusterSnapshotsOutput,
    DescribeClustersOutput, DescribeResizeOutput, ModifyClusterOutput,
    ModifyClusterParameterGroupOutput, RestoreFromClusterSnapshotOutput,
};

/// All supported Redshift operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedshiftOperation {
    // Clusters
    /// Create a new cluster.
    CreateCluster,
    /// Change the settings of a cluster.
    ModifyCluster,
    /// Delete a cluster, optionally taking a final snapshot.
    DeleteCluster,
    /// Describe one or all clusters.
    DescribeClusters,
    /// Create a new cluster from a snapshot.
    RestoreFromClusterSnapshot,

    // Snapshots
    /// Take a manual snapshot.
    CreateClusterSnapshot,
    /// List snapshots.
    DescribeClusterSnapshots,

    // Security and parameter groups
    /// Create a classic security group.
    CreateClusterSecurityGroup,
    /// Create a parameter group.
    CreateClusterParameterGroup,
    /// Change parameters in a parameter group.
    ModifyClusterParameterGroup,

    // Events, usage limits, scheduling, tagging
    /// Subscribe an SNS topic to cluster events.
    CreateEventSubscription,
    /// Limit usage of a cluster feature.
    CreateUsageLimit,
    /// Schedule a resize, pause or resume.
    CreateScheduledAction,
    /// Report progress of the latest resize.
    DescribeResize,
    /// Add tags to a resource.
    CreateTags,
}

impl RedshiftOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::CreateCluster,
        Self::ModifyCluster,
        Self::DeleteCluster,
        Self::DescribeClusters,
        Self::RestoreFromClusterSnapshot,
        Self::CreateClusterSnapshot,
        Self::DescribeClusterSnapshots,
        Self::CreateClusterSecurityGroup,
        Self::CreateClusterParameterGroup,
        Self::ModifyClusterParameterGroup,
        Self::CreateEventSubscription,
        Self::CreateUsageLimit,
        Self::CreateScheduledAction,
        Self::DescribeResize,
        Self::CreateTags,
    ];

    /// Returns the AWS action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateCluster => "CreateCluster",
            Self::ModifyCluster => "ModifyCluster",
            Self::DeleteCluster => "DeleteCluster",
            Self::DescribeClusters => "DescribeClusters",
            Self::RestoreFromClusterSnapshot => "RestoreFromClusterSnapshot",
            Self::CreateClusterSnapshot => "CreateClusterSnapshot",
            Self::DescribeClusterSnapshots => "DescribeClusterSnapshots",
            Self::CreateClusterSecurityGroup => "CreateClusterSecurityGroup",
            Self::CreateClusterParameterGroup => "CreateClusterParameterGroup",
            Self::ModifyClusterParameterGroup => "ModifyClusterParameterGroup",
            Self::CreateEventSubscription => "CreateEventSubscription",
            Self::CreateUsageLimit => "CreateUsageLimit",
            Self::CreateScheduledAction => "CreateScheduledAction",
            Self::DescribeResize => "DescribeResize",
            Self::CreateTags => "CreateTags",
        }
    }

    /// Parse an action name into a `RedshiftOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Run `visitor` with this operation's marker type.
    pub fn visit<V: OperationVisitor>(self, visitor: V) -> V::Output {
        match self {
            Self::CreateCluster => visitor.visit::<CreateCluster>(),
            Self::ModifyCluster => visitor.visit::<ModifyCluster>(),
            Self::DeleteCluster => visitor.visit::<DeleteCluster>(),
            Self::DescribeClusters => visitor.visit::<DescribeClusters>(),
            Self::RestoreFromClusterSnapshot => visitor.visit::<RestoreFromClusterSnapshot>(),
            Self::CreateClusterSnapshot => visitor.visit::<CreateClusterSnapshot>(),
            Self::DescribeClusterSnapshots => visitor.visit::<DescribeClusterSnapshots>(),
            Self::CreateClusterSecurityGroup => visitor.visit::<CreateClusterSecurityGroup>(),
            Self::CreateClusterParameterGroup => visitor.visit::<CreateClusterParameterGroup>(),
            Self::ModifyClusterParameterGroup => visitor.visit::<ModifyClusterParameterGroup>(),
            Self::CreateEventSubscription => visitor.visit::<CreateEventSubscription>(),
            Self::CreateUsageLimit => visitor.visit::<CreateUsageLimit>(),
            Self::CreateScheduledAction => visitor.visit::<CreateScheduledAction>(),
            Self::DescribeResize => visitor.visit::<DescribeResize>(),
            Self::CreateTags => visitor.visit::<CreateTags>(),
        }
    }
}

impl fmt::Display for RedshiftOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time description of one operation.
pub trait Operation: Send + Sync + 'static {
    /// The runtime name of this operation.
    const OPERATION: RedshiftOperation;

    /// Request shape.
    type Input: QueryShape + Clone + PartialEq + Serialize + DeserializeOwned;

    /// Result shape.
    type Output: QueryShape + Clone + PartialEq + Serialize + DeserializeOwned;
}

/// Code that is generic over the operation, dispatched by
/// [`RedshiftOperation::visit`].
pub trait OperationVisitor {
    /// What the visit produces.
    type Output;

    /// Run for operation `O`.
    fn visit<O: Operation>(self) -> Self::Output;
}

macro_rules! operation_markers {
    ($( $name:ident => $input:ty, $output:ty; )*) => {
        $(
            #[doc = concat!("Marker type for the `", stringify!($name), "` operation.")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Operation for $name {
                const OPERATION: RedshiftOperation = RedshiftOperation::$name;
                type Input = $input;
                type Output = $output;
            }
        )*
    };
}

operation_markers! {
    CreateCluster => CreateClusterInput, CreateClusterOutput;
    ModifyCluster => ModifyClusterInput, ModifyClusterOutput;
    DeleteCluster => DeleteClusterInput, DeleteClusterOutput;
    DescribeClusters => DescribeClustersInput, DescribeClustersOutput;
    RestoreFromClusterSnapshot => RestoreFromClusterSnapshotInput, RestoreFromClusterSnapshotOutput;
    CreateClusterSnapshot => CreateClusterSnapshotInput, CreateClusterSnapshotOutput;
    DescribeClusterSnapshots => DescribeClusterSnapshotsInput, DescribeClusterSnapshotsOutput;
    CreateClusterSecurityGroup => CreateClusterSecurityGroupInput, CreateClusterSecurityGroupOutput;
    CreateClusterParameterGroup => CreateClusterParameterGroupInput, CreateClusterParameterGroupOutput;
    ModifyClusterParameterGroup => ModifyClusterParameterGroupInput, ModifyClusterParameterGroupOutput;
    CreateEventSubscription => CreateEventSubscriptionInput, CreateEventSubscriptionOutput;
    CreateUsageLimit => CreateUsageLimitInput, CreateUsageLimitOutput;
    CreateScheduledAction => CreateScheduledActionInput, CreateScheduledActionOutput;
    DescribeResize => DescribeResizeInput, DescribeResizeOutput;
    CreateTags => CreateTagsInput, CreateTagsOutput;
}
