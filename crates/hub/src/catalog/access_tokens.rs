use crate::descriptor::{Method, ParamSpec, ParamType, ToolDescriptor};
use crate::models::{
    AccessToken, CreateAccessTokenRequest, GetAccessTokensResponse, PatchAccessTokenRequest,
};
use crate::shape::{RequestShape, ResponseShape};

const TOKEN: &str = "/v2/access-tokens/{uuid}";

pub fn list_tokens() -> ToolDescriptor {
    ToolDescriptor::new("get_v2_access-tokens", Method::Get, "/v2/access-tokens")
        .describe("Get a list of personal access tokens")
        .param(ParamSpec::query(
            "page",
            ParamType::Number,
            "Page number to get. Defaults to 1.",
        ))
        .param(ParamSpec::query(
            "page_size",
            ParamType::Number,
            "Number of tokens to get per page. Defaults to 10.",
        ))
        .response(ResponseShape::of::<GetAccessTokensResponse>())
}

pub fn create_token() -> ToolDescriptor {
    ToolDescriptor::new("post_v2_access-tokens", Method::Post, "/v2/access-tokens")
        .describe("Create a personal access token")
        .param(
            ParamSpec::body(
                "token_label",
                ParamType::String,
                "Friendly name for you to identify the token.",
            )
            .required(),
        )
        .param(
            ParamSpec::body(
                "scopes",
                ParamType::Array,
                "Valid scopes: \"repo:admin\", \"repo:write\", \"repo:read\", \"repo:public_read\".",
            )
            .required(),
        )
        .request(RequestShape::of::<CreateAccessTokenRequest>())
        .response(ResponseShape::of::<AccessToken>())
}

pub fn get_token() -> ToolDescriptor {
    ToolDescriptor::new("get_v2_access-tokens_uuid", Method::Get, TOKEN)
        .describe("Get a personal access token")
        .param(ParamSpec::path("uuid", "UUID of the access token."))
        .response(ResponseShape::of::<AccessToken>())
}

pub fn update_token() -> ToolDescriptor {
    ToolDescriptor::new("patch_v2_access-tokens_uuid", Method::Patch, TOKEN)
        .describe("Update a personal access token")
        .param(ParamSpec::path("uuid", "UUID of the access token."))
        .param(ParamSpec::body(
            "token_label",
            ParamType::String,
            "Friendly name for you to identify the token.",
        ))
        .param(ParamSpec::body(
            "is_active",
            ParamType::Boolean,
            "Whether the token is active.",
        ))
        .request(RequestShape::of::<PatchAccessTokenRequest>())
        .response(ResponseShape::of::<AccessToken>())
}

pub fn delete_token() -> ToolDescriptor {
    ToolDescriptor::new("delete_v2_access-tokens_uuid", Method::Delete, TOKEN)
        .describe("Delete a personal access token")
        .param(ParamSpec::path("uuid", "UUID of the access token."))
}
