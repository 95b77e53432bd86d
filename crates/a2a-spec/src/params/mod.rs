//! Request parameters for the `tasks/pushNotificationConfig/*` operations.

pub mod delete_task_push_notification_config;
pub mod get_task_push_notification_config;

use serde::Deserialize;

use crate::errors::A2aSpecError;

const TASKS_SEGMENT: &str = "tasks";
const CONFIGS_SEGMENT: &str = "pushNotificationConfigs";

/// Behaviour shared by the params addressing a single push notification
/// config of a task.
pub trait TaskPushNotificationConfigParams {
    /// JSON-RPC method these params are sent with.
    const METHOD: &'static str;

    fn task_id(&self) -> &str;

    fn id(&self) -> &str;

    fn tenant(&self) -> &str;

    /// Resource name in the form `[{tenant}/]tasks/{taskId}/pushNotificationConfigs/{id}`.
    ///
    /// Segments are percent-encoded so every field value parses back through
    /// `from_resource_name`. An empty tenant drops the prefix.
    fn resource_name(&self) -> String {
        let name = format!(
            "{TASKS_SEGMENT}/{}/{CONFIGS_SEGMENT}/{}",
            urlencoding::encode(self.task_id()),
            urlencoding::encode(self.id())
        );
        if self.tenant().is_empty() {
            name
        } else {
            format!("{}/{name}", urlencoding::encode(self.tenant()))
        }
    }
}

/// Parts of a resource name, in `(task_id, id, tenant)` order.
pub(crate) fn parse_resource_name(name: &str) -> Result<(String, String, String), A2aSpecError> {
    let parts: Vec<&str> = name.split('/').collect();
    let (tenant, rest) = match parts.len() {
        4 => ("", &parts[..]),
        5 => (parts[0], &parts[1..]),
        _ => {
            return Err(A2aSpecError::malformed(
                "name",
                format!(
                    "is not a valid resource name: expected [{{tenant}}/]{TASKS_SEGMENT}/{{taskId}}/{CONFIGS_SEGMENT}/{{id}}, got {name}"
                ),
            ));
        }
    };

    if rest[0] != TASKS_SEGMENT || rest[2] != CONFIGS_SEGMENT {
        return Err(A2aSpecError::malformed(
            "name",
            format!("is not a valid resource name: unexpected segments in {name}"),
        ));
    }

    Ok((
        decode_segment(name, rest[1])?,
        decode_segment(name, rest[3])?,
        decode_segment(name, tenant)?,
    ))
}

fn decode_segment(name: &str, segment: &str) -> Result<String, A2aSpecError> {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| {
            A2aSpecError::malformed(
                "name",
                format!("is not a valid resource name: bad escape in {name}: {e}"),
            )
        })
}

/// Body as it arrives on the wire, before required fields are checked.
/// `tenant` usually travels in the request path, so an absent one is `""`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTaskPushNotificationConfigParams {
    task_id: Option<String>,
    id: Option<String>,
    tenant: Option<String>,
}

impl RawTaskPushNotificationConfigParams {
    pub(crate) fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
        (
            self.task_id,
            self.id,
            Some(self.tenant.unwrap_or_default()),
        )
    }
}
