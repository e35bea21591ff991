//! Shared Redshift shapes.
//!
//! Member order follows the service model, which is also the order members
//! are flattened into request parameters. List paths name the element the
//! service wraps each item in (`Tags/Tag`, `ClusterNodes/member`).

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Small building blocks
// ---------------------------------------------------------------------------

redshift_shape! {
    /// A key/value tag attached to a resource.
    pub struct Tag {
        scalar "Key" => key: String,
        scalar "Value" => value: String,
    }
}

redshift_shape! {
    /// Connection endpoint of a cluster.
    pub struct Endpoint {
        scalar "Address" => address: String,
        scalar "Port" => port: i32,
    }
}

redshift_shape! {
    pub struct ClusterSecurityGroupMembership {
        scalar "ClusterSecurityGroupName" => cluster_security_group_name: String,
        scalar "Status" => status: String,
    }
}

redshift_shape! {
    pub struct VpcSecurityGroupMembership {
        scalar "VpcSecurityGroupId" => vpc_security_group_id: String,
        scalar "Status" => status: String,
    }
}

redshift_shape! {
    /// Apply status of a single parameter on a cluster.
    pub struct ClusterParameterStatus {
        scalar "ParameterName" => parameter_name: String,
        scalar "ParameterApplyStatus" => parameter_apply_status: String,
        scalar "ParameterApplyErrorDescription" => parameter_apply_error_description: String,
    }
}

redshift_shape! {
    /// A parameter group attached to a cluster, with per-parameter status.
    pub struct ClusterParameterGroupStatus {
        scalar "ParameterGroupName" => parameter_group_name: String,
        scalar "ParameterApplyStatus" => parameter_apply_status: String,
        structure_list(Member) "ClusterParameterStatusList" => cluster_parameter_status_list: Vec<ClusterParameterStatus>,
    }
}

redshift_shape! {
    /// Changes to a cluster that take effect in the next maintenance window.
    pub struct PendingModifiedValues {
        scalar "MasterUserPassword" => master_user_password: String,
        scalar "NodeType" => node_type: String,
        scalar "NumberOfNodes" => number_of_nodes: i32,
        scalar "ClusterType" => cluster_type: String,
        scalar "ClusterVersion" => cluster_version: String,
        scalar "AutomatedSnapshotRetentionPeriod" => automated_snapshot_retention_period: i32,
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "PubliclyAccessible" => publicly_accessible: bool,
        scalar "EnhancedVpcRouting" => enhanced_vpc_routing: bool,
        scalar "MaintenanceTrackName" => maintenance_track_name: String,
        scalar "EncryptionType" => encryption_type: String,
    }
}

redshift_shape! {
    /// Progress of a restore from snapshot.
    pub struct RestoreStatus {
        scalar "Status" => status: String,
        scalar "CurrentRestoreRateInMegaBytesPerSecond" => current_restore_rate_in_mega_bytes_per_second: f64,
        scalar "SnapshotSizeInMegaBytes" => snapshot_size_in_mega_bytes: i64,
        scalar "ProgressInMegaBytes" => progress_in_mega_bytes: i64,
        scalar "ElapsedTimeInSeconds" => elapsed_time_in_seconds: i64,
        scalar "EstimatedTimeToCompletionInSeconds" => estimated_time_to_completion_in_seconds: i64,
    }
}

redshift_shape! {
    pub struct DataTransferProgress {
        scalar "Status" => status: String,
        scalar "CurrentRateInMegaBytesPerSecond" => current_rate_in_mega_bytes_per_second: f64,
        scalar "TotalDataInMegaBytes" => total_data_in_mega_bytes: i64,
        scalar "DataTransferredInMegaBytes" => data_transferred_in_mega_bytes: i64,
        scalar "EstimatedTimeToCompletionInSeconds" => estimated_time_to_completion_in_seconds: i64,
        scalar "ElapsedTimeInSeconds" => elapsed_time_in_seconds: i64,
    }
}

redshift_shape! {
    pub struct HsmStatus {
        scalar "HsmClientCertificateIdentifier" => hsm_client_certificate_identifier: String,
        scalar "HsmConfigurationIdentifier" => hsm_configuration_identifier: String,
        scalar "Status" => status: String,
    }
}

redshift_shape! {
    /// Cross-region snapshot copy settings.
    pub struct ClusterSnapshotCopyStatus {
        scalar "DestinationRegion" => destination_region: String,
        scalar "RetentionPeriod" => retention_period: i64,
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        scalar "SnapshotCopyGrantName" => snapshot_copy_grant_name: String,
    }
}

redshift_shape! {
    /// A leader or compute node.
    pub struct ClusterNode {
        scalar "NodeRole" => node_role: String,
        scalar "PrivateIPAddress" => private_ip_address: String,
        scalar "PublicIPAddress" => public_ip_address: String,
    }
}

redshift_shape! {
    pub struct ElasticIpStatus {
        scalar "ElasticIp" => elastic_ip: String,
        scalar "Status" => status: String,
    }
}

redshift_shape! {
    pub struct ClusterIamRole {
        scalar "IamRoleArn" => iam_role_arn: String,
        scalar "ApplyStatus" => apply_status: String,
    }
}

redshift_shape! {
    pub struct DeferredMaintenanceWindow {
        scalar "DeferMaintenanceIdentifier" => defer_maintenance_identifier: String,
        scalar "DeferMaintenanceStartTime" => defer_maintenance_start_time: DateTime<Utc>,
        scalar "DeferMaintenanceEndTime" => defer_maintenance_end_time: DateTime<Utc>,
    }
}

redshift_shape! {
    pub struct ResizeInfo {
        scalar "ResizeType" => resize_type: String,
        scalar "AllowCancelResize" => allow_cancel_resize: bool,
    }
}

// ---------------------------------------------------------------------------
// Clusters
// ---------------------------------------------------------------------------

redshift_shape! {
    /// A provisioned Redshift cluster.
    pub struct Cluster {
        /// Unique identifier of the cluster.
        scalar "ClusterIdentifier" => cluster_identifier: String,
        /// Node type of the compute nodes (`dc2.large`, `ra3.4xlarge`, ...).
        scalar "NodeType" => node_type: String,
        /// Current state (`available`, `creating`, `deleting`, ...).
        scalar "ClusterStatus" => cluster_status: String,
        scalar "ClusterAvailabilityStatus" => cluster_availability_status: String,
        scalar "ModifyStatus" => modify_status: String,
        scalar "MasterUsername" => master_username: String,
        scalar "DBName" => db_name: String,
        structure "Endpoint" => endpoint: Endpoint,
        scalar "ClusterCreateTime" => cluster_create_time: DateTime<Utc>,
        scalar "AutomatedSnapshotRetentionPeriod" => automated_snapshot_retention_period: i32,
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        structure_list(Indexed) "ClusterSecurityGroups" @ "ClusterSecurityGroups/ClusterSecurityGroup" => cluster_security_groups: Vec<ClusterSecurityGroupMembership>,
        structure_list(Indexed) "VpcSecurityGroups" @ "VpcSecurityGroups/VpcSecurityGroup" => vpc_security_groups: Vec<VpcSecurityGroupMembership>,
        structure_list(Member) "ClusterParameterGroups" @ "ClusterParameterGroups/ClusterParameterGroup" => cluster_parameter_groups: Vec<ClusterParameterGroupStatus>,
        scalar "ClusterSubnetGroupName" => cluster_subnet_group_name: String,
        scalar "VpcId" => vpc_id: String,
        scalar "AvailabilityZone" => availability_zone: String,
        scalar "PreferredMaintenanceWindow" => preferred_maintenance_window: String,
        structure "PendingModifiedValues" => pending_modified_values: PendingModifiedValues,
        scalar "ClusterVersion" => cluster_version: String,
        scalar "AllowVersionUpgrade" => allow_version_upgrade: bool,
        scalar "NumberOfNodes" => number_of_nodes: i32,
        scalar "PubliclyAccessible" => publicly_accessible: bool,
        scalar "Encrypted" => encrypted: bool,
        structure "RestoreStatus" => restore_status: RestoreStatus,
        structure "DataTransferProgress" => data_transfer_progress: DataTransferProgress,
        structure "HsmStatus" => hsm_status: HsmStatus,
        structure "ClusterSnapshotCopyStatus" => cluster_snapshot_copy_status: ClusterSnapshotCopyStatus,
        scalar "ClusterPublicKey" => cluster_public_key: String,
        structure_list(Member) "ClusterNodes" => cluster_nodes: Vec<ClusterNode>,
        structure "ElasticIpStatus" => elastic_ip_status: ElasticIpStatus,
        scalar "ClusterRevisionNumber" => cluster_revision_number: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
        scalar "KmsKeyId" => kms_key_id: String,
        scalar "EnhancedVpcRouting" => enhanced_vpc_routing: bool,
        structure_list(Indexed) "IamRoles" @ "IamRoles/ClusterIamRole" => iam_roles: Vec<ClusterIamRole>,
        scalar_list(Member) "PendingActions" => pending_actions: Vec<String>,
        scalar "MaintenanceTrackName" => maintenance_track_name: String,
        scalar "ElasticResizeNumberOfNodeOptions" => elastic_resize_number_of_node_options: String,
        structure_list(Indexed) "DeferredMaintenanceWindows" @ "DeferredMaintenanceWindows/DeferredMaintenanceWindow" => deferred_maintenance_windows: Vec<DeferredMaintenanceWindow>,
        scalar "SnapshotScheduleIdentifier" => snapshot_schedule_identifier: String,
        scalar "SnapshotScheduleState" => snapshot_schedule_state: String,
        scalar "ExpectedNextSnapshotScheduleTime" => expected_next_snapshot_schedule_time: DateTime<Utc>,
        scalar "ExpectedNextSnapshotScheduleTimeStatus" => expected_next_snapshot_schedule_time_status: String,
        scalar "NextMaintenanceWindowStartTime" => next_maintenance_window_start_time: DateTime<Utc>,
        structure "ResizeInfo" => resize_info: ResizeInfo,
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

redshift_shape! {
    /// An account allowed to restore a manual snapshot.
    pub struct AccountWithRestoreAccess {
        scalar "AccountId" => account_id: String,
        scalar "AccountAlias" => account_alias: String,
    }
}

redshift_shape! {
    /// A point-in-time snapshot of a cluster.
    pub struct Snapshot {
        scalar "SnapshotIdentifier" => snapshot_identifier: String,
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "SnapshotCreateTime" => snapshot_create_time: DateTime<Utc>,
        scalar "Status" => status: String,
        scalar "Port" => port: i32,
        scalar "AvailabilityZone" => availability_zone: String,
        scalar "ClusterCreateTime" => cluster_create_time: DateTime<Utc>,
        scalar "MasterUsername" => master_username: String,
        scalar "ClusterVersion" => cluster_version: String,
        /// `manual` or `automated`.
        scalar "SnapshotType" => snapshot_type: String,
        scalar "NodeType" => node_type: String,
        scalar "NumberOfNodes" => number_of_nodes: i32,
        scalar "DBName" => db_name: String,
        scalar "VpcId" => vpc_id: String,
        scalar "Encrypted" => encrypted: bool,
        scalar "KmsKeyId" => kms_key_id: String,
        scalar "EncryptedWithHSM" => encrypted_with_hsm: bool,
        structure_list(Indexed) "AccountsWithRestoreAccess" @ "AccountsWithRestoreAccess/AccountWithRestoreAccess" => accounts_with_restore_access: Vec<AccountWithRestoreAccess>,
        scalar "OwnerAccount" => owner_account: String,
        scalar "TotalBackupSizeInMegaBytes" => total_backup_size_in_mega_bytes: f64,
        scalar "ActualIncrementalBackupSizeInMegaBytes" => actual_incremental_backup_size_in_mega_bytes: f64,
        scalar "BackupProgressInMegaBytes" => backup_progress_in_mega_bytes: f64,
        scalar "CurrentBackupRateInMegaBytesPerSecond" => current_backup_rate_in_mega_bytes_per_second: f64,
        scalar "EstimatedSecondsToCompletion" => estimated_seconds_to_completion: i64,
        scalar "ElapsedTimeInSeconds" => elapsed_time_in_seconds: i64,
        scalar "SourceRegion" => source_region: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
        scalar_list(Member) "RestorableNodeTypes" @ "RestorableNodeTypes/NodeType" => restorable_node_types: Vec<String>,
        scalar "EnhancedVpcRouting" => enhanced_vpc_routing: bool,
        scalar "MaintenanceTrackName" => maintenance_track_name: String,
        scalar "ManualSnapshotRetentionPeriod" => manual_snapshot_retention_period: i32,
        scalar "ManualSnapshotRemainingDays" => manual_snapshot_remaining_days: i32,
        scalar "SnapshotRetentionStartTime" => snapshot_retention_start_time: DateTime<Utc>,
    }
}

redshift_shape! {
    /// Sort order applied when listing snapshots.
    pub struct SnapshotSortingEntity {
        /// `SOURCE_TYPE`, `TOTAL_SIZE` or `CREATE_TIME`.
        scalar "Attribute" => attribute: String,
        /// `ASC` or `DESC`.
        scalar "SortOrder" => sort_order: String,
    }
}

// ---------------------------------------------------------------------------
// Security and parameter groups
// ---------------------------------------------------------------------------

redshift_shape! {
    pub struct Ec2SecurityGroup {
        scalar "Status" => status: String,
        scalar "EC2SecurityGroupName" => ec2_security_group_name: String,
        scalar "EC2SecurityGroupOwnerId" => ec2_security_group_owner_id: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    pub struct IpRange {
        scalar "Status" => status: String,
        scalar "CIDRIP" => cidr_ip: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// A classic (non-VPC) security group.
    pub struct ClusterSecurityGroup {
        scalar "ClusterSecurityGroupName" => cluster_security_group_name: String,
        scalar "Description" => description: String,
        structure_list(Indexed) "EC2SecurityGroups" @ "EC2SecurityGroups/EC2SecurityGroup" => ec2_security_groups: Vec<Ec2SecurityGroup>,
        structure_list(Indexed) "IPRanges" @ "IPRanges/IPRange" => ip_ranges: Vec<IpRange>,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    pub struct ClusterParameterGroup {
        scalar "ParameterGroupName" => parameter_group_name: String,
        scalar "ParameterGroupFamily" => parameter_group_family: String,
        scalar "Description" => description: String,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    /// A database engine parameter.
    pub struct Parameter {
        scalar "ParameterName" => parameter_name: String,
        scalar "ParameterValue" => parameter_value: String,
        scalar "Description" => description: String,
        scalar "Source" => source: String,
        scalar "DataType" => data_type: String,
        scalar "AllowedValues" => allowed_values: String,
        /// `static` or `dynamic`.
        scalar "ApplyType" => apply_type: String,
        scalar "IsModifiable" => is_modifiable: bool,
        scalar "MinimumEngineVersion" => minimum_engine_version: String,
    }
}

// ---------------------------------------------------------------------------
// Events and scheduling
// ---------------------------------------------------------------------------

redshift_shape! {
    /// An SNS subscription to cluster events.
    pub struct EventSubscription {
        scalar "CustomerAwsId" => customer_aws_id: String,
        scalar "CustSubscriptionId" => cust_subscription_id: String,
        scalar "SnsTopicArn" => sns_topic_arn: String,
        scalar "Status" => status: String,
        scalar "SubscriptionCreationTime" => subscription_creation_time: DateTime<Utc>,
        scalar "SourceType" => source_type: String,
        scalar_list(Indexed) "SourceIdsList" @ "SourceIdsList/SourceId" => source_ids_list: Vec<String>,
        scalar_list(Indexed) "EventCategoriesList" @ "EventCategoriesList/EventCategory" => event_categories_list: Vec<String>,
        scalar "Severity" => severity: String,
        scalar "Enabled" => enabled: bool,
        structure_list(Indexed) "Tags" @ "Tags/Tag" => tags: Vec<Tag>,
    }
}

redshift_shape! {
    pub struct ResizeClusterMessage {
        scalar "ClusterIdentifier" => cluster_identifier: String,
        scalar "ClusterType" => cluster_type: String,
        scalar "NodeType" => node_type: String,
        scalar "NumberOfNodes" => number_of_nodes: i32,
        scalar "Classic" => classic: bool,
    }
}

redshift_shape! {
    pub struct PauseClusterMessage {
        scalar "ClusterIdentifier" => cluster_identifier: String,
    }
}

redshift_shape! {
    pub struct ResumeClusterMessage {
        scalar "ClusterIdentifier" => cluster_identifier: String,
    }
}

redshift_shape! {
    /// The action a scheduled action runs. Exactly one member is set.
    pub struct ScheduledActionType {
        structure "ResizeCluster" => resize_cluster: ResizeClusterMessage,
        structure "PauseCluster" => pause_cluster: PauseClusterMessage,
        structure "ResumeCluster" => resume_cluster: ResumeClusterMessage,
    }
}
