use crate::descriptor::{Method, ParamSpec, ParamType, ToolDescriptor};
use crate::models::{PaginatedTags, Tag};
use crate::shape::ResponseShape;

const TAGS: &str = "/v2/namespaces/{namespace}/repositories/{repository}/tags";
const TAG: &str = "/v2/namespaces/{namespace}/repositories/{repository}/tags/{tag}";

fn repository(tool: ToolDescriptor) -> ToolDescriptor {
    tool.param(ParamSpec::path("namespace", "Namespace of the repository."))
        .param(ParamSpec::path("repository", "Name of the repository."))
}

pub fn list_tags() -> ToolDescriptor {
    repository(
        ToolDescriptor::new(
            "get_v2_namespaces_namespace_repositories_repository_tags",
            Method::Get,
            TAGS,
        )
        .describe("List repository tags"),
    )
    .param(ParamSpec::query(
        "page",
        ParamType::Number,
        "Page number to get. Defaults to 1.",
    ))
    .param(ParamSpec::query(
        "page_size",
        ParamType::Number,
        "Number of items to get per page. Defaults to 10. Max of 100.",
    ))
    .response(ResponseShape::of::<PaginatedTags>())
}

pub fn check_tags() -> ToolDescriptor {
    repository(
        ToolDescriptor::new(
            "head_v2_namespaces_namespace_repositories_repository_tags",
            Method::Head,
            TAGS,
        )
        .describe("Check repository tags"),
    )
}

pub fn get_tag() -> ToolDescriptor {
    repository(
        ToolDescriptor::new(
            "get_v2_namespaces_namespace_repositories_repository_tags_tag",
            Method::Get,
            TAG,
        )
        .describe("Read repository tag"),
    )
    .param(ParamSpec::path("tag", "Name of the tag."))
    .response(ResponseShape::of::<Tag>())
}

pub fn check_tag() -> ToolDescriptor {
    repository(
        ToolDescriptor::new(
            "head_v2_namespaces_namespace_repositories_repository_tags_tag",
            Method::Head,
            TAG,
        )
        .describe("Check repository tag"),
    )
    .param(ParamSpec::path("tag", "Name of the tag."))
}
