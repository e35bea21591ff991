//! Typed Redshift client.

use rustack_core::ClientConfig;
use rustack_query::{encode_request, unmarshall_response};
use rustack_redshift_model::operations::{
    CreateCluster, CreateClusterParameterGroup, CreateClusterSecurityGroup, CreateClusterSnapshot,
    CreateEventSubscription, CreateScheduledAction, CreateTags, CreateUsageLimit, DeleteCluster,
    DescribeClusterSnapshots, DescribeClusters, DescribeResize, ModifyCluster,
    ModifyClusterParameterGroup, RestoreFromClusterSnapshot,
};
use rustack_redshift_model::{API_VERSION, Operation};

use crate::error::RedshiftClientError;
use crate::transport::{QueryRequest, Transport};

/// Redshift client over a pluggable transport.
///
/// The client holds no per-call state; one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct RedshiftClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> RedshiftClient<T> {
    /// Create a client.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call operation `O`.
    ///
    /// Flattening a typed input cannot fail, so errors come only from the
    /// transport, the timeout or the response document. The configured
    /// request timeout bounds the transport call only.
    pub async fn invoke<O: Operation>(
        &self,
        input: &O::Input,
    ) -> Result<O::Output, RedshiftClientError> {
        let operation = O::OPERATION;
        let params = encode_request(input, operation.as_str(), API_VERSION);

        let request = QueryRequest {
            operation,
            endpoint: self.config.endpoint(),
            params,
        };
        tracing::debug!(
            operation = %operation,
            endpoint = %request.endpoint,
            params = request.params.len(),
            "sending Redshift request"
        );

        let timeout = self.config.request_timeout();
        let body = tokio::time::timeout(timeout, self.transport.send(request))
            .await
            .map_err(|_| RedshiftClientError::Timeout { operation, timeout })?
            .map_err(|source| RedshiftClientError::Transport { operation, source })?;

        unmarshall_response::<O::Output>(&body)
            .map_err(|source| RedshiftClientError::Decode { operation, source })
    }
}

macro_rules! operation_methods {
    ($( $(#[$doc:meta])* $method:ident => $op:ident; )*) => {
        impl<T: Transport> RedshiftClient<T> {
            $(
                $(#[$doc])*
                pub async fn $method(
                    &self,
                    input: &<$op as Operation>::Input,
                ) -> Result<<$op as Operation>::Output, RedshiftClientError> {
                    self.invoke::<$op>(input).await
                }
            )*
        }
    };
}

operation_methods! {
    /// Create a new cluster.
    create_cluster => CreateCluster;
    /// Change the settings of a cluster.
    modify_cluster => ModifyCluster;
    /// Delete a cluster.
    delete_cluster => DeleteCluster;
    /// Describe one or all clusters.
    describe_clusters => DescribeClusters;
    /// Create a new cluster from a snapshot.
    restore_from_cluster_snapshot => RestoreFromClusterSnapshot;
    /// Take a manual snapshot.
    create_cluster_snapshot => CreateClusterSnapshot;
    /// List snapshots.
    describe_cluster_snapshots => DescribeClusterSnapshots;
    /// Create a classic security group.
    create_cluster_security_group => CreateClusterSecurityGroup;
    /// Create a parameter group.
    create_cluster_parameter_group => CreateClusterParameterGroup;
    /// Change parameters in a parameter group.
    modify_cluster_parameter_group => ModifyClusterParameterGroup;
    /// Subscribe an SNS topic to cluster events.
    create_event_subscription => CreateEventSubscription;
    /// Limit usage of a cluster feature.
    create_usage_limit => CreateUsageLimit;
    /// Schedule a resize, pause or resume.
    create_scheduled_action => CreateScheduledAction;
    /// Report progress of the latest resize.
    describe_resize => DescribeResize;
    /// Add tags to a resource.
    create_tags => CreateTags;
}
