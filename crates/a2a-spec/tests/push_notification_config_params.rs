use a2a_spec::{
    errors::{A2aSpecError, JsonrpcError},
    params::{
        TaskPushNotificationConfigParams,
        delete_task_push_notification_config::DeleteTaskPushNotificationConfigParams,
        get_task_push_notification_config::GetTaskPushNotificationConfigParams,
    },
};

fn describe<P: TaskPushNotificationConfigParams>(params: &P) -> (String, String) {
    (P::METHOD.to_string(), params.resource_name())
}

#[test]
fn test_delete_without_tenant_example() {
    let params = DeleteTaskPushNotificationConfigParams::without_tenant("task-1", "cfg-9");
    assert_eq!(params.task_id(), "task-1");
    assert_eq!(params.id(), "cfg-9");
    assert_eq!(params.tenant(), "");
}

#[test]
fn test_builder_without_tenant_is_rejected() {
    let err = DeleteTaskPushNotificationConfigParams::builder()
        .task_id("task-1")
        .id("cfg-9")
        .build()
        .unwrap_err();
    assert_eq!(err, A2aSpecError::missing("tenant"));

    let rpc = JsonrpcError::from(err);
    assert_eq!(rpc.code, -32602);
    assert_eq!(rpc.message, "Parameter 'tenant' may not be null");
}

#[test]
fn test_both_params_share_resource_naming() {
    let get = GetTaskPushNotificationConfigParams::new("task-1", "cfg-9", "acme");
    let delete = DeleteTaskPushNotificationConfigParams::new("task-1", "cfg-9", "acme");

    let (get_method, get_name) = describe(&get);
    let (delete_method, delete_name) = describe(&delete);

    assert_eq!(get_method, "tasks/pushNotificationConfig/get");
    assert_eq!(delete_method, "tasks/pushNotificationConfig/delete");
    assert_eq!(get_name, delete_name);
    assert_eq!(
        DeleteTaskPushNotificationConfigParams::from_resource_name(&get_name).unwrap(),
        delete
    );
}

#[test]
fn test_params_from_jsonrpc_request_body() {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tasks/pushNotificationConfig/get",
        "params": { "taskId": "task-1", "id": "cfg-9" }
    });

    let params: GetTaskPushNotificationConfigParams =
        serde_json::from_value(body["params"].clone()).unwrap();
    assert_eq!(
        params,
        GetTaskPushNotificationConfigParams::without_tenant("task-1", "cfg-9")
    );
    assert_eq!(
        body["method"],
        <GetTaskPushNotificationConfigParams as TaskPushNotificationConfigParams>::METHOD
    );
}

#[test]
fn test_tenant_with_slash_survives_resource_name() {
    let get = GetTaskPushNotificationConfigParams::new("task/1", "cfg-9", "org/team");
    let name = get.resource_name();

    assert_eq!(
        name,
        "org%2Fteam/tasks/task%2F1/pushNotificationConfigs/cfg-9"
    );
    assert_eq!(
        GetTaskPushNotificationConfigParams::from_resource_name(&name).unwrap(),
        get
    );
}
