//! Security groups, parameter groups, subscriptions, usage limits and
//! scheduled actions.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rustack_redshift_model::input::{
        CreateClusterParameterGroupInput, CreateClusterSecurityGroupInput,
        CreateEventSubscriptionInput, CreateScheduledActionInput, CreateUsageLimitInput,
        ModifyClusterParameterGroupInput,
    };
    use rustack_redshift_model::types::{
        Parameter, PauseClusterMessage, ResizeClusterMessage, ScheduledActionType, Tag,
    };

    use crate::{
        ACCOUNT_ID, TestClient, create_test_cluster, fault_code, redshift_client, test_identifier,
    };

    async fn create_parameter_group(client: &TestClient, name: &str) {
        client
            .create_cluster_parameter_group(&CreateClusterParameterGroupInput {
                parameter_group_name: Some(name.to_owned()),
                parameter_group_family: Some("redshift-1.0".to_owned()),
                description: Some("integration test parameters".to_owned()),
                tags: None,
            })
            .await
            .unwrap_or_else(|e| panic!("failed to create parameter group {name}: {e}"));
    }

    fn parameter(name: &str, value: &str) -> Parameter {
        Parameter {
            parameter_name: Some(name.to_owned()),
            parameter_value: Some(value.to_owned()),
            ..Parameter::default()
        }
    }

    #[tokio::test]
    async fn test_should_create_security_group() {
        let (client, _service) = redshift_client();
        let name = test_identifier("sg");

        let group = client
            .create_cluster_security_group(&CreateClusterSecurityGroupInput {
                cluster_security_group_name: Some(name.clone()),
                description: Some("analysts & <admins>".to_owned()),
                tags: Some(vec![Tag {
                    key: Some("team".to_owned()),
                    value: Some("bi".to_owned()),
                }]),
            })
            .await
            .expect("create_cluster_security_group")
            .cluster_security_group
            .expect("group");
        assert_eq!(group.cluster_security_group_name.as_deref(), Some(name.as_str()));
        assert_eq!(group.description.as_deref(), Some("analysts & <admins>"));
        assert_eq!(group.ec2_security_groups, Some(Vec::new()));
        assert_eq!(group.ip_ranges, Some(Vec::new()));
        assert_eq!(group.tags.unwrap_or_default().len(), 1);
    }

    #[tokio::test]
    async fn test_should_require_security_group_description() {
        let (client, _service) = redshift_client();
        let err = client
            .create_cluster_security_group(&CreateClusterSecurityGroupInput {
                cluster_security_group_name: Some(test_identifier("sg")),
                ..CreateClusterSecurityGroupInput::default()
            })
            .await
            .unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("MissingParameter"));
    }

    #[tokio::test]
    async fn test_should_modify_parameter_group() {
        let (client, service) = redshift_client();
        let name = test_identifier("pg");
        create_parameter_group(&client, &name).await;

        let output = client
            .modify_cluster_parameter_group(&ModifyClusterParameterGroupInput {
                parameter_group_name: Some(name.clone()),
                parameters: Some(vec![
                    parameter("max_cursor_result_set_size", "default"),
                    parameter("statement_timeout", "60000"),
                ]),
            })
            .await
            .expect("modify_cluster_parameter_group");
        assert_eq!(output.parameter_group_name.as_deref(), Some(name.as_str()));
        assert!(
            output
                .parameter_group_status
                .is_some_and(|s| s.starts_with("Your parameter group has been updated"))
        );
        assert_eq!(
            service.parameter_value(&name, "statement_timeout").as_deref(),
            Some("60000")
        );

        let sent = service.received();
        let request = sent.last().expect("request");
        assert_eq!(
            request.get("Parameters.member.2.ParameterName"),
            Some("statement_timeout")
        );
    }

    #[tokio::test]
    async fn test_should_reject_unknown_parameter_group() {
        let (client, _service) = redshift_client();
        let err = client
            .modify_cluster_parameter_group(&ModifyClusterParameterGroupInput {
                parameter_group_name: Some(test_identifier("nopg")),
                parameters: Some(vec![parameter("statement_timeout", "0")]),
            })
            .await
            .unwrap_err();
        assert_eq!(
            fault_code(&err).as_deref(),
            Some("ClusterParameterGroupNotFound")
        );
    }

    #[tokio::test]
    async fn test_should_create_event_subscription() {
        let (client, _service) = redshift_client();
        let cluster_id = create_test_cluster(&client, "events").await;
        let name = test_identifier("sub");

        let subscription = client
            .create_event_subscription(&CreateEventSubscriptionInput {
                subscription_name: Some(name.clone()),
                sns_topic_arn: Some("arn:aws:sns:us-east-1:123456789012:alerts".to_owned()),
                source_type: Some("cluster".to_owned()),
                source_ids: Some(vec![cluster_id.clone()]),
                event_categories: Some(vec!["management".to_owned(), "monitoring".to_owned()]),
                severity: Some("ERROR".to_owned()),
                ..CreateEventSubscriptionInput::default()
            })
            .await
            .expect("create_event_subscription")
            .event_subscription
            .expect("subscription");
        assert_eq!(subscription.cust_subscription_id.as_deref(), Some(name.as_str()));
        assert_eq!(subscription.customer_aws_id.as_deref(), Some(ACCOUNT_ID));
        assert_eq!(subscription.source_ids_list, Some(vec![cluster_id]));
        assert_eq!(
            subscription.event_categories_list,
            Some(vec!["management".to_owned(), "monitoring".to_owned()])
        );
        assert_eq!(subscription.enabled, Some(true));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_severity() {
        let (client, _service) = redshift_client();
        let err = client
            .create_event_subscription(&CreateEventSubscriptionInput {
                subscription_name: Some(test_identifier("sub")),
                sns_topic_arn: Some("arn:aws:sns:us-east-1:123456789012:alerts".to_owned()),
                severity: Some("DEBUG".to_owned()),
                ..CreateEventSubscriptionInput::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            fault_code(&err).as_deref(),
            Some("SubscriptionSeverityNotFound")
        );
    }

    #[tokio::test]
    async fn test_should_create_usage_limit() {
        let (client, _service) = redshift_client();
        let cluster_id = create_test_cluster(&client, "limit").await;

        let limit = client
            .create_usage_limit(&CreateUsageLimitInput {
                cluster_identifier: Some(cluster_id.clone()),
                feature_type: Some("concurrency-scaling".to_owned()),
                limit_type: Some("time".to_owned()),
                amount: Some(60),
                breach_action: Some("emit-metric".to_owned()),
                ..CreateUsageLimitInput::default()
            })
            .await
            .expect("create_usage_limit");
        assert!(limit.usage_limit_id.is_some());
        assert_eq!(limit.cluster_identifier.as_deref(), Some(cluster_id.as_str()));
        assert_eq!(limit.amount, Some(60));
        assert_eq!(limit.period.as_deref(), Some("monthly"));
        assert_eq!(limit.breach_action.as_deref(), Some("emit-metric"));

        let err = client
            .create_usage_limit(&CreateUsageLimitInput {
                cluster_identifier: Some(cluster_id),
                feature_type: Some("spectrum".to_owned()),
                limit_type: Some("time".to_owned()),
                amount: Some(10),
                ..CreateUsageLimitInput::default()
            })
            .await
            .unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("InvalidUsageLimit"));
    }

    #[tokio::test]
    async fn test_should_create_scheduled_resize() {
        let (client, _service) = redshift_client();
        let cluster_id = create_test_cluster(&client, "sched").await;
        let name = test_identifier("nightly");

        let action = client
            .create_scheduled_action(&CreateScheduledActionInput {
                scheduled_action_name: Some(name.clone()),
                target_action: Some(ScheduledActionType {
                    resize_cluster: Some(ResizeClusterMessage {
                        cluster_identifier: Some(cluster_id.clone()),
                        number_of_nodes: Some(4),
                        classic: Some(false),
                        ..ResizeClusterMessage::default()
                    }),
                    ..ScheduledActionType::default()
                }),
                schedule: Some("at(2026-11-01T06:30:00)".to_owned()),
                iam_role: Some("arn:aws:iam::123456789012:role/scheduler".to_owned()),
                ..CreateScheduledActionInput::default()
            })
            .await
            .expect("create_scheduled_action");

        assert_eq!(action.scheduled_action_name.as_deref(), Some(name.as_str()));
        assert_eq!(action.state.as_deref(), Some("ACTIVE"));
        let resize = action
            .target_action
            .and_then(|t| t.resize_cluster)
            .expect("resize target");
        assert_eq!(resize.cluster_identifier.as_deref(), Some(cluster_id.as_str()));
        assert_eq!(resize.number_of_nodes, Some(4));
        assert_eq!(resize.classic, Some(false));
        assert_eq!(
            action.next_invocations,
            Some(vec![Utc.with_ymd_and_hms(2026, 11, 1, 6, 30, 0).unwrap()])
        );
    }

    #[tokio::test]
    async fn test_should_reject_ambiguous_scheduled_action() {
        let (client, _service) = redshift_client();
        let cluster_id = create_test_cluster(&client, "ambig").await;

        let err = client
            .create_scheduled_action(&CreateScheduledActionInput {
                scheduled_action_name: Some(test_identifier("both")),
                target_action: Some(ScheduledActionType {
                    resize_cluster: Some(ResizeClusterMessage {
                        cluster_identifier: Some(cluster_id.clone()),
                        ..ResizeClusterMessage::default()
                    }),
                    pause_cluster: Some(PauseClusterMessage {
                        cluster_identifier: Some(cluster_id),
                    }),
                    ..ScheduledActionType::default()
                }),
                schedule: Some("cron(0 22 * * ? *)".to_owned()),
                iam_role: Some("arn:aws:iam::123456789012:role/scheduler".to_owned()),
                ..CreateScheduledActionInput::default()
            })
            .await
            .unwrap_err();
        assert_eq!(fault_code(&err).as_deref(), Some("InvalidScheduledAction"));
    }
}
