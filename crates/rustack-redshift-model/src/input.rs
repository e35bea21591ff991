//! Redshift request shapes.
//!
//! Each input is flattened into query parameters after the `Action` and
//! `Version` pair. Lists of plain identifiers use `Name.N` keys; lists of
//! structures declared with the `member` convention use `Name.member.N`.

use chrono::{DateTime, Utc};

use crate::types::{Parameter, ScheduledActionType, SnapshotSortingEntity, Tag};

// ---------------------------------------------------------------------------
// Clusters
// ---------------------------------------------------------------------------

redshift_shape! {
    /// Input for the `CreateCluster` operation.
    pub struct CreateClusterInput {
        /// Name of the first database created in the cluster. Defaults to `dev`.
        scalar "DBName" => db_name: String,
        /// Unique, lowercase identifier of the new cluster.
        scalar "ClusterIdentifier" => cluster_identifier: String,
        /// `single-node` or `multi-node`.
        scalar "ClusterType" => cluster_type: String,
        scalar "NodeType" => node_type: String,
        scalar "MasterUsername" => master_username: String,
        scalar "MasterUserPassword" => master_user_password: String,
        scalar_list(Indexed) "ClusterSecurityGroups" @ "ClusterSecurityGroups/ClusterSecurityGroupName" => cluster_security_groups: Vec<String>,
        scalar_list(Indexed) "VpcSecurityGroupIds" @ "VpcSecurityGroupIds/VpcSecurityGroupId" => vpc_security_group_ids: Vec<String>,
        scalar "ClusterSubnetGroupName" => cluster_subnet_group_name: String,
        scalar "AvailabilityZone" => availability_zone: String,
        scalar "PreferredMaintenanceWindow" => preferred_maintenance_window: String,
        scalar "ClusterParameterGroupName" => cluster_parameter_group_name: String,
        scalar "AutomatedSnapshotRetentionPeriod" => automated_snapshot_retention_period: i32,
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        scalar "Port" => port: i32,
        scalar "ClusterVersion" => cluster_version: String,
        scalar "AllowVersionUpgrade" => allow_version_upgrade: bool,
        /// Required when the cluster type is `multi-node`.
        scalar "NumberOfNodes" => number_of_nodes: i32,
        scalar "PubliclyAccessible" => publicly_accessible: bool,
        scalar "Encrypted" => encrypted: bool,
        scalar "HsmClientCertificateIdentifier" => hsm_client_certificate_identifier: String,
        scalar "HsmConfigurationIdentifier" => hsm_configuration_identifier: String,
        scalar "ElasticIp" => elastic_ip: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
        scalar "KmsKeyId" => kms_key_id: String,
        scalar "EnhancedVpcRouting" => enhanced_vpc_routing: bool,
        scalar "AdditionalInfo" => additional_info: String,
        scalar_list(Indexed) "IamRoles" @ "IamRoles/IamRoleArn" => iam_roles: Vec<String>,
        scalar "MaintenanceTrackName" => maintenance_track_name: String,
        scalar "SnapshotScheduleIdentifier" => snapshot_schedule_identifier: String,
    }
}

redshift_shape! {
    /// Input for the `ModifyCluster` operation.
    pub struct ModifyClusterInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "ClusterType" => cluster_type: String,
        scalar "NodeType" => node_type: String,
        scalar "NumberOfNodes" => number_of_nodes: i32,
        scalar_list(Indexed) "ClusterSecurityGroups" @ "ClusterSecurityGroups/ClusterSecurityGroupName" => cluster_security_groups: Vec<String>,
        scalar_list(Indexed) "VpcSecurityGroupIds" @ "VpcSecurityGroupIds/VpcSecurityGroupId" => vpc_security_group_ids: Vec<String>,
        scalar "MasterUserPassword" => master_user_password: String,
        scalar "ClusterParameterGroupName" => cluster_parameter_group_name: String,
        scalar "AutomatedSnapshotRetentionPeriod" => automated_snapshot_retention_period: i32,
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        scalar "PreferredMaintenanceWindow" => preferred_maintenance_window: String,
        scalar "ClusterVersion" => cluster_version: String,
        scalar "AllowVersionUpgrade" => allow_version_upgrade: bool,
        scalar "HsmClientCertificateIdentifier" => hsm_client_certificate_identifier: String,
        scalar "HsmConfigurationIdentifier" => hsm_configuration_identifier: String,
        /// Renames the cluster.
        scalar "NewClusterIdentifier" => new_cluster_identifier: String,
        scalar "PubliclyAccessible" => publicly_accessible: bool,
        scalar "ElasticIp" => elastic_ip: String,
        scalar "EnhancedVpcRouting" => enhanced_vpc_routing: bool,
        scalar "MaintenanceTrackName" => maintenance_track_name: String,
        scalar "Encrypted" => encrypted: bool,
        scalar "KmsKeyId" => kms_key_id: String,
    }
}

redshift_shape! {
    /// Input for the `DeleteCluster` operation.
    pub struct DeleteClusterInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "SkipFinalClusterSnapshot" => skip_final_cluster_snapshot: bool,
        /// Required unless `SkipFinalClusterSnapshot` is `true`.
        scalar "FinalClusterSnapshotIdentifier" => final_cluster_snapshot_identifier: String,
        scalar "FinalClusterSnapshotRetentionPeriod" => final_cluster_snapshot_retention_period: i32,
    }
}

redshift_shape! {
    /// Input for the `DescribeClusters` operation.
    pub struct DescribeClustersInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "MaxRecords" => max_records: i32,
        /// Pagination token from a previous response.
        scalar "Marker" => marker: String,
        scalar_list(Indexed) "TagKeys" @ "TagKeys/TagKey" => tag_keys: Vec<String>,
        scalar_list(Indexed) "TagValues" @ "TagValues/TagValue" => tag_values: Vec<String>,
    }
}

redshift_shape! {
    /// Input for the `RestoreFromClusterSnapshot` operation.
    pub struct RestoreFromClusterSnapshotInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "SnapshotIdentifier" => snapshot_identifier: String,
        scalar "SnapshotClusterIdentifier" => snapshot_cluster_identifier: String,
        scalar "Port" => port: i32,
        scalar "AvailabilityZone" => availability_zone: String,
        scalar "AllowVersionUpgrade" => allow_version_upgrade: bool,
        scalar "ClusterSubnetGroupName" => cluster_subnet_group_name: String,
        scalar "PubliclyAccessible" => publicly_accessible: bool,
        /// Account that owns the snapshot, when restoring a shared snapshot.
        scalar "OwnerAccount" => owner_account: String,
        scalar "HsmClientCertificateIdentifier" => hsm_client_certificate_identifier: String,
        scalar "HsmConfigurationIdentifier" => hsm_configuration_identifier: String,
        scalar "ElasticIp" => elastic_ip: String,
        scalar "ClusterParameterGroupName" => cluster_parameter_group_name: String,
        scalar_list(Indexed) "ClusterSecurityGroups" @ "ClusterSecurityGroups/ClusterSecurityGroupName" => cluster_security_groups: Vec<String>,
        scalar_list(Indexed) "VpcSecurityGroupIds" @ "VpcSecurityGroupIds/VpcSecurityGroupId" => vpc_security_group_ids: Vec<String>,
        scalar "PreferredMaintenanceWindow" => preferred_maintenance_window: String,
        scalar "AutomatedSnapshotRetentionPeriod" => automated_snapshot_retention_period: i32,
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        scalar "KmsKeyId" => kms_key_id: String,
        scalar "NodeType" => node_type: String,
        scalar "EnhancedVpcRouting" => enhanced_vpc_routing: bool,
        scalar "AdditionalInfo" => additional_info: String,
        scalar_list(Indexed) "IamRoles" @ "IamRoles/IamRoleArn" => iam_roles: Vec<String>,
        scalar "MaintenanceTrackName" => maintenance_track_name: String,
        scalar "SnapshotScheduleIdentifier" => snapshot_schedule_identifier: String,
        scalar "NumberOfNodes" => number_of_nodes: i32,
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

redshift_shape! {
    /// Input for the `CreateClusterSnapshot` operation.
    pub struct CreateClusterSnapshotInput {
        scalar "SnapshotIdentifier" => snapshot_identifier: String,
        scalar "ClusterIdentifier" => cluster_identifier: String,
        /// Days to keep the snapshot; `-1` keeps it indefinitely.
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// Input for the `DescribeClusterSnapshots` operation.
    pub struct DescribeClusterSnapshotsInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "SnapshotIdentifier" => snapshot_identifier: String,
        scalar "SnapshotType" => snapshot_type: String,
        scalar "StartTime" => start_time: DateTime<Utc>,
        scalar "EndTime" => end_time: DateTime<Utc>,
        scalar "MaxRecords" => max_records: i32,
        scalar "Marker" => marker: String,
        scalar "OwnerAccount" => owner_account: String,
        scalar_list(Indexed) "TagKeys" @ "TagKeys/TagKey" => tag_keys: Vec<String>,
        scalar_list(Indexed) "TagValues" @ "TagValues/TagValue" => tag_values: Vec<String>,
        scalar "ClusterExists" => cluster_exists: bool,
        structure_list(Member) "SortingEntities" @ "SortingEntities/SnapshotSortingEntity" => sorting_entities: Vec<SnapshotSortingEntity>,
    }
}

// ---------------------------------------------------------------------------
// Security and parameter groups
// ---------------------------------------------------------------------------

redshift_shape! {
    /// Input for the `CreateClusterSecurityGroup` operation.
    pub struct CreateClusterSecurityGroupInput {
        scalar "ClusterSecurityGroupName" => cluster_security_group_name: String,
        scalar "Description" => description: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// Input for the `CreateClusterParameterGroup` operation.
    pub struct CreateClusterParameterGroupInput {
        scalar "ParameterGroupName" => parameter_group_name: String,
        /// Engine family, e.g. `redshift-1.0`.
        scalar "ParameterGroupFamily" => parameter_group_family: String,
        scalar "Description" => description: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// Input for the `ModifyClusterParameterGroup` operation.
    pub struct ModifyClusterParameterGroupInput {
        scalar "ParameterGroupName" => parameter_group_name: String,
        structure_list(Member) "Parameters" @ "Parameters/Parameter" => parameters: Vec<Parameter>,
    }
}

// ---------------------------------------------------------------------------
// Events, usage limits, scheduling, tagging
// ---------------------------------------------------------------------------

redshift_shape! {
    /// Input for the `CreateEventSubscription` operation.
    pub struct CreateEventSubscriptionInput {
        scalar "SubscriptionName" => subscription_name: String,
        scalar "SnsTopicArn" => sns_topic_arn: String,
        scalar "SourceType" => source_type: String,
        scalar_list(Indexed) "SourceIds" @ "SourceIds/SourceId" => source_ids: Vec<String>,
        scalar_list(Indexed) "EventCategories" @ "EventCategories/EventCategory" => event_categories: Vec<String>,
        /// `ERROR` or `INFO`.
        scalar "Severity" => severity: String,
        scalar "Enabled" => enabled: bool,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// Input for the `CreateUsageLimit` operation.
    pub struct CreateUsageLimitInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        /// `spectrum`, `concurrency-scaling` or `cross-region-datasharing`.
        scalar "FeatureType" => feature_type: String,
        /// `time` or `data-scanned`.
        scalar "LimitType" => limit_type: String,
        scalar "Amount" => amount: i64,
        scalar "Period" => period: String,
        scalar "BreachAction" => breach_action: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// Input for the `CreateScheduledAction` operation.
    pub struct CreateScheduledActionInput {
        scalar "ScheduledActionName" => scheduled_action_name: String,
        structure "TargetAction" => target_action: ScheduledActionType,
        /// `at(...)` or `cron(...)` expression.
        scalar "Schedule" => schedule: String,
        scalar "IamRole" => iam_role: String,
        scalar "ScheduledActionDescription" => scheduled_action_description: String,
        scalar "StartTime" => start_time: DateTime<Utc>,
        scalar "EndTime" => end_time: DateTime<Utc>,
        scalar "Enable" => enable: bool,
    }
}

redshift_shape! {
    /// Input for the `DescribeResize` operation.
    pub struct DescribeResizeInput {
        scalar "ClusterIdentifier" => cluster_identifier: String,
    }
}

redshift_shape! {
    /// Input for the `CreateTags` operation.
    pub struct CreateTagsInput {
        /// ARN of the resource to tag.
        scalar "ResourceName" => resource_name: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}
