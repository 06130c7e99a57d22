use crate::descriptor::{Method, ParamSpec, ParamType, ToolDescriptor};
use crate::models::{GetAuditActionsResponse, GetAuditLogsResponse};
use crate::shape::ResponseShape;

pub fn get_audit_logs() -> ToolDescriptor {
    ToolDescriptor::new("get_v2_auditlogs_account", Method::Get, "/v2/auditlogs/{account}")
        .describe("Returns list of audit log events.")
        .param(ParamSpec::path("account", "Namespace to query audit logs for."))
        .param(ParamSpec::query(
            "action",
            ParamType::String,
            "Action name, e.g. \"repo.tag.push\". Filters to specific audit log actions.",
        ))
        .param(ParamSpec::query(
            "name",
            ParamType::String,
            "Filters events to a specific name: the repository for repository events, \
             the organization for organization events, the username for team member events.",
        ))
        .param(ParamSpec::query(
            "actor",
            ParamType::String,
            "Filters events to the user who triggered them.",
        ))
        .param(ParamSpec::query(
            "from",
            ParamType::String,
            "Start of the time window to query audit events for.",
        ))
        .param(ParamSpec::query(
            "to",
            ParamType::String,
            "End of the time window to query audit events for.",
        ))
        .param(ParamSpec::query("page", ParamType::Number, "Page number to get."))
        .param(ParamSpec::query(
            "page_size",
            ParamType::Number,
            "Number of events to return per page.",
        ))
        .response(ResponseShape::of::<GetAuditLogsResponse>())
}

pub fn get_audit_actions() -> ToolDescriptor {
    ToolDescriptor::new(
        "get_v2_auditlogs_account_actions",
        Method::Get,
        "/v2/auditlogs/{account}/actions",
    )
    .describe("Returns list of audit log actions for a namespace to be used as a filter when querying audit events.")
    .param(ParamSpec::path("account", "Namespace to query audit log actions for."))
    .response(ResponseShape::of::<GetAuditActionsResponse>())
}
