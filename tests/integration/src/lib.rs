//! End-to-end tests for the Redshift client.
//!
//! Every test drives a [`RedshiftClient`] against [`FakeRedshift`], an
//! in-process service that parses the real form body and answers with real
//! awsQuery documents. The whole encode, send and decode path runs without a
//! network, so these tests are not ignored.
//!
//! ```text
//! cargo test -p rustack-integration
//! ```


use std::sync::{Arc, Once};

use rustack_core::ClientConfig;
use rustack_query::unmarshall_response;
use rustack_redshift_client::{RedshiftClient, RedshiftClientError, TransportError};
use rustack_redshift_model::input::CreateClusterInput;

pub use crate::fake::{ACCOUNT_ID, ErrorDetail, FakeRedshift, ServiceFault};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Client type used by the tests.
pub type TestClient = RedshiftClient<Arc<FakeRedshift>>;

/// Create a client wired to a fresh fake service.
#[must_use]
pub fn redshift_client() -> (TestClient, Arc<FakeRedshift>) {
    init_tracing();

    let service = Arc::new(FakeRedshift::default());
    let config = ClientConfig::builder()
        .endpoint_url("http://localhost:4566")
        .request_timeout_ms(5_000)
        .build();
    (RedshiftClient::new(Arc::clone(&service), config), service)
}

/// Generate a unique, lowercase resource identifier for a test.
#[must_use]
pub fn test_identifier(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Fault code carried by a rejected call, if the service rejected it.
#[must_use]
pub fn fault_code(err: &RedshiftClientError) -> Option<String> {
    let RedshiftClientError::Transport {
        source: TransportError::Status { body, .. },
        ..
    } = err
    else {
        return None;
    };
    unmarshall_response::<ErrorDetail>(body).ok()?.code
}

/// Input for a small two-node cluster.
#[must_use]
pub fn cluster_input(id: &str) -> CreateClusterInput {
    CreateClusterInput {
        cluster_identifier: Some(id.to_owned()),
        node_type: Some("dc2.large".to_owned()),
        master_username: Some("admin".to_owned()),
        master_user_password: Some("Secret123".to_owned()),
        number_of_nodes: Some(2),
        ..CreateClusterInput::default()
    }
}

/// Create a cluster and return its identifier.
pub async fn create_test_cluster(client: &TestClient, prefix: &str) -> String {
    let id = test_identifier(prefix);
    client
        .create_cluster(&cluster_input(&id))
        .await
        .unwrap_or_else(|e| panic!("failed to create cluster {id}: {e}"));
    id
}

mod test_cluster;
mod test_fault;
mod test_groups;
