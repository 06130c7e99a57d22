use crate::descriptor::{Method, ParamSpec, ParamType, ToolDescriptor};
use crate::models::OrgSettings;
use crate::shape::{RequestShape, ResponseShape};

const SETTINGS: &str = "/v2/orgs/{name}/settings";

pub fn get_settings() -> ToolDescriptor {
    ToolDescriptor::new("get_v2_orgs_name_settings", Method::Get, SETTINGS)
        .describe("Get organization settings")
        .param(ParamSpec::path("name", "Name of the organization."))
        .response(ResponseShape::of::<OrgSettings>())
}

pub fn update_settings() -> ToolDescriptor {
    ToolDescriptor::new("put_v2_orgs_name_settings", Method::Put, SETTINGS)
        .describe("Update organization settings")
        .param(ParamSpec::path("name", "Name of the organization."))
        .param(ParamSpec::body(
            "restricted_images",
            ParamType::Object,
            "Image restriction settings: `enabled`, `allow_official_images`, \
             `allow_verified_publishers`.",
        ))
        .request(RequestShape::of::<OrgSettings>())
        .response(ResponseShape::of::<OrgSettings>())
}
