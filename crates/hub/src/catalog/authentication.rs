use crate::descriptor::{Method, ParamSpec, ParamType, ToolDescriptor};
use crate::models::{Users2faLoginRequest, UsersLoginRequest, UsersLoginResponse};
use crate::shape::{RequestShape, ResponseShape};

pub fn login() -> ToolDescriptor {
    ToolDescriptor::new("post_v2_users_login", Method::Post, "/v2/users/login")
        .describe("Create an authentication token")
        .param(
            ParamSpec::body(
                "username",
                ParamType::String,
                "The username of the Docker Hub account to authenticate with.",
            )
            .required(),
        )
        .param(
            ParamSpec::body(
                "password",
                ParamType::String,
                "The password or personal access token (PAT) of the Docker Hub account.",
            )
            .required(),
        )
        .request(RequestShape::of::<UsersLoginRequest>())
        .response(ResponseShape::of::<UsersLoginResponse>())
}

pub fn login_2fa() -> ToolDescriptor {
    ToolDescriptor::new("post_v2_users_2fa-login", Method::Post, "/v2/users/2fa-login")
        .describe("Second factor authentication")
        .param(
            ParamSpec::body(
                "login_2fa_token",
                ParamType::String,
                "The intermediate 2FA token returned from `/v2/users/login`.",
            )
            .required(),
        )
        .param(
            ParamSpec::body(
                "code",
                ParamType::String,
                "The Time-based One-Time Password of the Docker Hub account.",
            )
            .required(),
        )
        .request(RequestShape::of::<Users2faLoginRequest>())
        .response(ResponseShape::of::<UsersLoginResponse>())
}
