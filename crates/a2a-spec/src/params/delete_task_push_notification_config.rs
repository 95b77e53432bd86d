use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::{
    errors::A2aSpecError,
    params::{
        RawTaskPushNotificationConfigParams, TaskPushNotificationConfigParams, parse_resource_name,
    },
    validation::require,
};

/// Parameters for deleting a push notification configuration from a task.
///
/// Identifies the task and the specific configuration to remove. `tenant` is
/// normally supplied as a path parameter by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder, Serialize, ToSchema)]
#[builder(
    pattern = "owned",
    setter(into),
    build_fn(error = "A2aSpecError")
)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskPushNotificationConfigParams {
    task_id: String,
    id: String,
    // Marks the field optional in the schema; deserialization is hand-written below.
    #[serde(default)]
    tenant: String,
}

impl DeleteTaskPushNotificationConfigParams {
    pub fn new(task_id: impl Into<String>, id: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            id: id.into(),
            tenant: tenant.into(),
        }
    }

    /// Params for the default tenant (`""`).
    pub fn without_tenant(task_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(task_id, id, "")
    }

    /// Builds the params from values that may be absent.
    pub fn try_new(
        task_id: Option<String>,
        id: Option<String>,
        tenant: Option<String>,
    ) -> Result<Self, A2aSpecError> {
        Ok(Self::new(
            require("taskId", task_id)?,
            require("id", id)?,
            require("tenant", tenant)?,
        ))
    }

    /// Parses `[{tenant}/]tasks/{taskId}/pushNotificationConfigs/{id}`.
    pub fn from_resource_name(name: &str) -> Result<Self, A2aSpecError> {
        let (task_id, id, tenant) = parse_resource_name(name)?;
        Ok(Self::new(task_id, id, tenant))
    }

    pub fn builder() -> DeleteTaskPushNotificationConfigParamsBuilder {
        DeleteTaskPushNotificationConfigParamsBuilder::default()
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Id of the configuration to delete.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }
}

impl TaskPushNotificationConfigParams for DeleteTaskPushNotificationConfigParams {
    const METHOD: &'static str = "tasks/pushNotificationConfig/delete";

    fn task_id(&self) -> &str {
        DeleteTaskPushNotificationConfigParams::task_id(self)
    }

    fn id(&self) -> &str {
        DeleteTaskPushNotificationConfigParams::id(self)
    }

    fn tenant(&self) -> &str {
        DeleteTaskPushNotificationConfigParams::tenant(self)
    }
}

impl<'de> Deserialize<'de> for DeleteTaskPushNotificationConfigParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (task_id, id, tenant) =
            RawTaskPushNotificationConfigParams::deserialize(deserializer)?.into_parts();
        Self::try_new(task_id, id, tenant).map_err(serde::de::Error::custom)
    }
}
