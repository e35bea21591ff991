//! Service fault integration tests.

#[cfg(test)]
mod tests {
    use rustack_query::{QueryParams, unmarshall_response};
    use rustack_redshift_client::{
        QueryRequest, RedshiftClientError, Transport, TransportError,
    };
    use rustack_redshift_model::RedshiftOperation;
    use rustack_redshift_model::input::{DescribeResizeInput, ModifyClusterInput};

    use crate::{ErrorDetail, fault_code, redshift_client, test_identifier};

    fn raw_request(pairs: &[(&str, &str)]) -> QueryRequest {
        QueryRequest {
            operation: RedshiftOperation::DescribeClusters,
            endpoint: "http://localhost:4566".to_owned(),
            params: pairs.iter().copied().collect::<QueryParams>(),
        }
    }

    #[tokio::test]
    async fn test_should_return_not_found_status() {
        let (client, _service) = redshift_client();
        let id = test_identifier("missing");

        let err = client
            .modify_cluster(&ModifyClusterInput {
                cluster_identifier: Some(id.clone()),
                number_of_nodes: Some(3),
                ..ModifyClusterInput::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.operation(), RedshiftOperation::ModifyCluster);
        let RedshiftClientError::Transport {
            source: TransportError::Status { status, body },
            ..
        } = &err
        else {
            panic!("expected a service fault, got {err}");
        };
        assert_eq!(*status, 404);

        let detail: ErrorDetail = unmarshall_response(body).expect("error document");
        assert_eq!(detail.kind.as_deref(), Some("Sender"));
        assert_eq!(detail.code.as_deref(), Some("ClusterNotFound"));
        assert_eq!(detail.message, Some(format!("Cluster {id} not found.")));
    }

    #[tokio::test]
    async fn test_should_require_cluster_identifier() {
        let (client, _service) = redshift_client();
        let err = client
            .describe_resize(&DescribeResizeInput::default())
            .await
            .unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("MissingParameter"));
        assert!(err.to_string().starts_with("DescribeResize request failed"));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_version() {
        let (_client, service) = redshift_client();
        let err = service
            .send(raw_request(&[
                ("Action", "DescribeClusters"),
                ("Version", "2010-01-01"),
            ]))
            .await
            .unwrap_err();

        let TransportError::Status { status, body } = err else {
            panic!("expected a service fault, got {err}");
        };
        assert_eq!(status, 400);
        let detail: ErrorDetail = unmarshall_response(&body).expect("error document");
        assert_eq!(detail.code.as_deref(), Some("InvalidAction"));
    }

    #[tokio::test]
    async fn test_should_reject_unconvertible_parameter() {
        let (_client, service) = redshift_client();
        let err = service
            .send(raw_request(&[
                ("Action", "DescribeClusters"),
                ("Version", "2012-12-01"),
                ("MaxRecords", "twenty"),
            ]))
            .await
            .unwrap_err();

        let TransportError::Status { body, .. } = err else {
            panic!("expected a service fault, got {err}");
        };
        let detail: ErrorDetail = unmarshall_response(&body).expect("error document");
        assert_eq!(detail.code.as_deref(), Some("InvalidParameterValue"));
    }

    #[tokio::test]
    async fn test_should_answer_raw_request_with_envelope() {
        let (_client, service) = redshift_client();
        let body = service
            .send(raw_request(&[
                ("Action", "DescribeClusters"),
                ("Version", "2012-12-01"),
            ]))
            .await
            .expect("describe_clusters");

        let xml = String::from_utf8(body.to_vec()).expect("utf-8");
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(
            r#"<DescribeClustersResponse xmlns="http://redshift.amazonaws.com/doc/2012-12-01/">"#
        ));
        assert!(xml.contains("<DescribeClustersResult><Clusters></Clusters></DescribeClustersResult>"));
        assert!(xml.contains("<ResponseMetadata><RequestId>"));
    }
}
