//! Cluster lifecycle integration tests.

#[cfg(test)]
mod tests {
    use rustack_redshift_model::input::{
        CreateClusterInput, CreateTagsInput, DeleteClusterInput, DescribeClustersInput,
        DescribeResizeInput, ModifyClusterInput,
    };
    use rustack_redshift_model::types::Tag;

    use crate::{
        cluster_input, create_test_cluster, fault_code, redshift_client, test_identifier,
    };

    fn tag(key: &str, value: &str) -> Tag {
        Tag {
            key: Some(key.to_owned()),
            value: Some(value.to_owned()),
        }
    }

    fn describe(id: &str) -> DescribeClustersInput {
        DescribeClustersInput {
            cluster_identifier: Some(id.to_owned()),
            ..DescribeClustersInput::default()
        }
    }

    fn delete(id: &str) -> DeleteClusterInput {
        DeleteClusterInput {
            cluster_identifier: Some(id.to_owned()),
            skip_final_cluster_snapshot: Some(true),
            ..DeleteClusterInput::default()
        }
    }

    #[tokio::test]
    async fn test_should_create_describe_and_delete_cluster() {
        let (client, service) = redshift_client();
        let id = test_identifier("lifecycle");

        let mut input = cluster_input(&id);
        input.db_name = Some("analytics".to_owned());
        input.iam_roles = Some(vec![
            "arn:aws:iam::123456789012:role/copy".to_owned(),
            "arn:aws:iam::123456789012:role/unload".to_owned(),
        ]);
        input.tags = Some(vec![tag("env", "test")]);

        let created = client
            .create_cluster(&input)
            .await
            .expect("create_cluster")
            .cluster
            .expect("cluster");
        assert_eq!(created.cluster_identifier.as_deref(), Some(id.as_str()));
        assert_eq!(created.db_name.as_deref(), Some("analytics"));
        assert_eq!(created.number_of_nodes, Some(2));
        assert_eq!(created.cluster_nodes.as_ref().map(Vec::len), Some(3));
        assert_eq!(created.endpoint.as_ref().and_then(|e| e.port), Some(5439));
        let roles: Vec<_> = created
            .iam_roles
            .iter()
            .flatten()
            .filter_map(|r| r.iam_role_arn.as_deref())
            .collect();
        assert_eq!(
            roles,
            vec![
                "arn:aws:iam::123456789012:role/copy",
                "arn:aws:iam::123456789012:role/unload"
            ]
        );

        let described = client
            .describe_clusters(&describe(&id))
            .await
            .expect("describe_clusters");
        let clusters = described.clusters.expect("clusters");
        assert_eq!(clusters, vec![created]);
        assert_eq!(described.marker, None);

        let deleted = client
            .delete_cluster(&delete(&id))
            .await
            .expect("delete_cluster")
            .cluster
            .expect("cluster");
        assert_eq!(deleted.cluster_status.as_deref(), Some("deleting"));
        assert_eq!(service.cluster_count(), 0);

        let err = client.describe_clusters(&describe(&id)).await.unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("ClusterNotFound"));
    }

    #[tokio::test]
    async fn test_should_create_single_node_cluster() {
        let (client, _service) = redshift_client();
        let id = test_identifier("single");
        let input = CreateClusterInput {
            cluster_type: Some("single-node".to_owned()),
            number_of_nodes: None,
            ..cluster_input(&id)
        };

        let cluster = client
            .create_cluster(&input)
            .await
            .expect("create_cluster")
            .cluster
            .expect("cluster");
        assert_eq!(cluster.number_of_nodes, Some(1));
        let nodes = cluster.cluster_nodes.expect("nodes");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].node_role.as_deref(), Some("SHARED"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_cluster() {
        let (client, _service) = redshift_client();
        let id = create_test_cluster(&client, "dup").await;

        let err = client.create_cluster(&cluster_input(&id)).await.unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("ClusterAlreadyExists"));
    }

    #[tokio::test]
    async fn test_should_page_through_clusters() {
        let (client, _service) = redshift_client();
        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(create_test_cluster(&client, "page").await);
        }
        ids.sort();

        let mut seen = Vec::new();
        let mut marker = None;
        loop {
            let page = client
                .describe_clusters(&DescribeClustersInput {
                    max_records: Some(2),
                    marker: marker.take(),
                    ..DescribeClustersInput::default()
                })
                .await
                .expect("describe_clusters");
            let clusters = page.clusters.unwrap_or_default();
            assert!(clusters.len() <= 2);
            seen.extend(clusters.into_iter().filter_map(|c| c.cluster_identifier));
            match page.marker {
                Some(next) => marker = Some(next),
                None => break,
            }
        }
        assert_eq!(seen, ids);
    }

    #[tokio::test]
    async fn test_should_filter_clusters_by_tag_key() {
        let (client, _service) = redshift_client();
        let tagged = test_identifier("tagged");
        let mut input = cluster_input(&tagged);
        input.tags = Some(vec![tag("team", "data")]);
        client.create_cluster(&input).await.expect("create_cluster");
        create_test_cluster(&client, "untagged").await;

        let found = client
            .describe_clusters(&DescribeClustersInput {
                tag_keys: Some(vec!["team".to_owned()]),
                ..DescribeClustersInput::default()
            })
            .await
            .expect("describe_clusters")
            .clusters
            .unwrap_or_default();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cluster_identifier.as_deref(), Some(tagged.as_str()));
    }

    #[tokio::test]
    async fn test_should_resize_and_describe_resize() {
        let (client, _service) = redshift_client();
        let id = create_test_cluster(&client, "resize").await;

        let err = client
            .describe_resize(&DescribeResizeInput {
                cluster_identifier: Some(id.clone()),
            })
            .await
            .unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("ResizeNotFound"));

        let cluster = client
            .modify_cluster(&ModifyClusterInput {
                cluster_identifier: Some(id.clone()),
                node_type: Some("ra3.xlplus".to_owned()),
                number_of_nodes: Some(4),
                ..ModifyClusterInput::default()
            })
            .await
            .expect("modify_cluster")
            .cluster
            .expect("cluster");
        assert_eq!(cluster.node_type.as_deref(), Some("ra3.xlplus"));
        assert_eq!(cluster.number_of_nodes, Some(4));

        let resize = client
            .describe_resize(&DescribeResizeInput {
                cluster_identifier: Some(id),
            })
            .await
            .expect("describe_resize");
        assert_eq!(resize.status.as_deref(), Some("SUCCEEDED"));
        assert_eq!(resize.target_number_of_nodes, Some(4));
        assert_eq!(resize.target_cluster_type.as_deref(), Some("multi-node"));
        assert_eq!(resize.import_tables_completed, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_should_rename_cluster() {
        let (client, _service) = redshift_client();
        let id = create_test_cluster(&client, "rename").await;
        let new_id = test_identifier("renamed");

        let cluster = client
            .modify_cluster(&ModifyClusterInput {
                cluster_identifier: Some(id.clone()),
                new_cluster_identifier: Some(new_id.clone()),
                master_user_password: Some("Rotated456".to_owned()),
                ..ModifyClusterInput::default()
            })
            .await
            .expect("modify_cluster")
            .cluster
            .expect("cluster");
        assert_eq!(cluster.cluster_identifier.as_deref(), Some(new_id.as_str()));
        assert!(
            cluster
                .endpoint
                .and_then(|e| e.address)
                .is_some_and(|a| a.starts_with(&new_id))
        );
        assert_eq!(
            cluster
                .pending_modified_values
                .and_then(|p| p.master_user_password)
                .as_deref(),
            Some("****")
        );

        let err = client.describe_clusters(&describe(&id)).await.unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("ClusterNotFound"));
        client
            .describe_clusters(&describe(&new_id))
            .await
            .expect("describe renamed cluster");
    }

    #[tokio::test]
    async fn test_should_tag_cluster_by_arn() {
        let (client, service) = redshift_client();
        let id = create_test_cluster(&client, "tags").await;

        client
            .create_tags(&CreateTagsInput {
                resource_name: Some(service.cluster_arn(&id)),
                tags: Some(vec![tag("env", "dev"), tag("owner", "data-eng")]),
            })
            .await
            .expect("create_tags");
        client
            .create_tags(&CreateTagsInput {
                resource_name: Some(service.cluster_arn(&id)),
                tags: Some(vec![tag("env", "prod")]),
            })
            .await
            .expect("create_tags");

        let cluster = client
            .describe_clusters(&describe(&id))
            .await
            .expect("describe_clusters")
            .clusters
            .and_then(|c| c.into_iter().next())
            .expect("cluster");
        assert_eq!(cluster.tags, Some(vec![tag("env", "prod"), tag("owner", "data-eng")]));
    }

    #[tokio::test]
    async fn test_should_require_final_snapshot_decision() {
        let (client, service) = redshift_client();
        let id = create_test_cluster(&client, "final").await;

        let err = client
            .delete_cluster(&DeleteClusterInput {
                cluster_identifier: Some(id.clone()),
                ..DeleteClusterInput::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            fault_code(&err).as_deref(),
            Some("InvalidParameterCombination")
        );
        assert_eq!(service.cluster_count(), 1);
    }

    #[tokio::test]
    async fn test_should_serve_concurrent_creates() {
        let (client, service) = redshift_client();
        let ids: Vec<String> = (0..4).map(|_| test_identifier("concurrent")).collect();
        let inputs: Vec<CreateClusterInput> = ids.iter().map(|id| cluster_input(id)).collect();

        let (a, b, c, d) = tokio::join!(
            client.create_cluster(&inputs[0]),
            client.create_cluster(&inputs[1]),
            client.create_cluster(&inputs[2]),
            client.create_cluster(&inputs[3]),
        );
        for result in [a, b, c, d] {
            result.expect("create_cluster");
        }
        assert_eq!(service.cluster_count(), 4);
    }
}
