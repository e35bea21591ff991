//! Redshift result shapes.
//!
//! Each output holds the children of the `<ActionResult>` element of the
//! response document.

use chrono::{DateTime, Utc};

use crate::types::{
    Cluster, ClusterParameterGroup, ClusterSecurityGroup, EventSubscription, ScheduledActionType,
    Snapshot, Tag,
};

redshift_shape! {
    /// Output of the `CreateCluster` operation.
    pub struct CreateClusterOutput {
        structure "Cluster" => cluster: Cluster,
    }
}

redshift_shape! {
    /// Output of the `ModifyCluster` operation.
    pub struct ModifyClusterOutput {
        structure "Cluster" => cluster: Cluster,
    }
}

redshift_shape! {
    /// Output of the `DeleteCluster` operation.
    pub struct DeleteClusterOutput {
        structure "Cluster" => cluster: Cluster,
    }
}

redshift_shape! {
    /// Output of the `DescribeClusters` operation.
    pub struct DescribeClustersOutput {
        /// Set when more clusters are available.
        scalar "Marker" => marker: String,
        structure_list(Indexed) "Clusters" @ "Clusters/Cluster" => clusters: Vec<Cluster>,
    }
}

redshift_shape! {
    /// Output of the `RestoreFromClusterSnapshot` operation.
    pub struct RestoreFromClusterSnapshotOutput {
        structure "Cluster" => cluster: Cluster,
    }
}

redshift_shape! {
    /// Output of the `CreateClusterSnapshot` operation.
    pub struct CreateClusterSnapshotOutput {
        structure "Snapshot" => snapshot: Snapshot,
    }
}

redshift_shape! {
    /// Output of the `DescribeClusterSnapshots` operation.
    pub struct DescribeClusterSnapshotsOutput {
        scalar "Marker" => marker: String,
        structure_list(Indexed) "Snapshots" @ "Snapshots/Snapshot" => snapshots: Vec<Snapshot>,
    }
}

redshift_shape! {
    /// Output of the `CreateClusterSecurityGroup` operation.
    pub struct CreateClusterSecurityGroupOutput {
        structure "ClusterSecurityGroup" => cluster_security_group: ClusterSecurityGroup,
    }
}

redshift_shape! {
    /// Output of the `CreateClusterParameterGroup` operation.
    pub struct CreateClusterParameterGroupOutput {
        structure "ClusterParameterGroup" => cluster_parameter_group: ClusterParameterGroup,
    }
}

redshift_shape! {
    /// Output of the `ModifyClusterParameterGroup` operation.
    pub struct ModifyClusterParameterGroupOutput {
        scalar "ParameterGroupName" => parameter_group_name: String,
        scalar "ParameterGroupStatus" => parameter_group_status: String,
    }
}

redshift_shape! {
    /// Output of the `CreateEventSubscription` operation.
    pub struct CreateEventSubscriptionOutput {
        structure "EventSubscription" => event_subscription: EventSubscription,
    }
}

redshift_shape! {
    /// Output of the `CreateUsageLimit` operation.
    pub struct CreateUsageLimitOutput {
        scalar "UsageLimitId" => usage_limit_id: String,
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "FeatureType" => feature_type: String,
        scalar "LimitType" => limit_type: String,
        scalar "Amount" => amount: i64,
        scalar "Period" => period: String,
        scalar "BreachAction" => breach_action: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// Output of the `CreateScheduledAction` operation.
    pub struct CreateScheduledActionOutput {
        scalar "ScheduledActionName" => scheduled_action_name: String,
        structure "TargetAction" => target_action: ScheduledActionType,
        scalar "Schedule" => schedule: String,
        scalar "IamRole" => iam_role: String,
        scalar "ScheduledActionDescription" => scheduled_action_description: String,
        /// `ACTIVE` or `DISABLED`.
        scalar "State" => state: String,
        scalar_list(Indexed) "NextInvocations" @ "NextInvocations/ScheduledActionTime" => next_invocations: Vec<DateTime<Utc>>,
        scalar "StartTime" => start_time: DateTime<Utc>,
        scalar "EndTime" => end_time: DateTime<Utc>,
    }
}

redshift_shape! {
    /// Output of the `DescribeResize` operation.
    pub struct DescribeResizeOutput {
        scalar "TargetNodeType" => target_node_type: String,
        scalar "TargetNumberOfNodes" => target_number_of_nodes: i32,
        scalar "TargetClusterType" => target_cluster_type: String,
        /// `NONE`, `IN_PROGRESS`, `FAILED`, `SUCCEEDED`, ...
        scalar "Status" => status: String,
        scalar_list(Member) "ImportTablesCompleted" => import_tables_completed: Vec<String>,
        scalar_list(Member) "ImportTablesInProgress" => import_tables_in_progress: Vec<String>,
        scalar_list(Member) "ImportTablesNotStarted" => import_tables_not_started: Vec<String>,
        scalar "AvgResizeRateInMegaBytesPerSecond" => avg_resize_rate_in_mega_bytes_per_second: f64,
        scalar "TotalResizeDataInMegaBytes" => total_resize_data_in_mega_bytes: i64,
        scalar "ProgressInMegaBytes" => progress_in_mega_bytes: i64,
        scalar "ElapsedTimeInSeconds" => elapsed_time_in_seconds: i64,
        scalar "EstimatedTimeToCompletionInSeconds" => estimated_time_to_completion_in_seconds: i64,
        scalar "ResizeType" => resize_type: String,
        scalar "Message" => message: String,
        scalar "TargetEncryptionType" => target_encryption_type: String,
        scalar "DataTransferProgressPercent" => data_transfer_progress_percent: f64,
    }
}

redshift_shape! {
    /// Output of the `CreateTags` operation. The result carries no members.
    pub struct CreateTagsOutput {}
}
