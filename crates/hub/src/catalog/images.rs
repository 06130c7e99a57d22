use crate::descriptor::{Method, ParamSpec, ParamType, ToolDescriptor};
use crate::models::{
    GetNamespaceRepositoryImagesResponse, GetNamespaceRepositoryImagesSummaryResponse,
    GetNamespaceRepositoryImagesTagsResponse, PostNamespacesDeleteImagesRequest,
    PostNamespacesDeleteImagesResponse,
};
use crate::shape::{RequestShape, ResponseShape};

const ACTIVE_FROM: &str = "Sets the time from which an image must have been pushed or pulled to \
                           be counted as active. Defaults to 1 month before the current time.";

pub fn list_images() -> ToolDescriptor {
    ToolDescriptor::new(
        "get_v2_namespaces_namespace_repositories_repository_images",
        Method::Get,
        "/v2/namespaces/{namespace}/repositories/{repository}/images",
    )
    .describe("Get details of repository's images")
    .param(ParamSpec::path("namespace", "Namespace of the repository."))
    .param(ParamSpec::path("repository", "Name of the repository."))
    .param(ParamSpec::query(
        "status",
        ParamType::String,
        "Filters to only show images of this status.",
    ))
    .param(ParamSpec::query(
        "currently_tagged",
        ParamType::Boolean,
        "Filters to only show images with at least one current tag (`true`) or none (`false`).",
    ))
    .param(ParamSpec::query(
        "ordering",
        ParamType::String,
        "Orders the results by this property. Prefixing with `-` sorts by descending order.",
    ))
    .param(ParamSpec::query("active_from", ParamType::String, ACTIVE_FROM))
    .param(ParamSpec::query(
        "page",
        ParamType::Number,
        "Page number to get. Defaults to 1.",
    ))
    .param(ParamSpec::query(
        "page_size",
        ParamType::Number,
        "Number of images to get per page. Defaults to 10. Max of 100.",
    ))
    .response(ResponseShape::of::<GetNamespaceRepositoryImagesResponse>())
}

pub fn images_summary() -> ToolDescriptor {
    ToolDescriptor::new(
        "get_v2_namespaces_namespace_repositories_repository_images-summary",
        Method::Get,
        "/v2/namespaces/{namespace}/repositories/{repository}/images-summary",
    )
    .describe("Get summary of repository's images")
    .param(ParamSpec::path("namespace", "Namespace of the repository."))
    .param(ParamSpec::path("repository", "Name of the repository."))
    .param(ParamSpec::query("active_from", ParamType::String, ACTIVE_FROM))
    .response(ResponseShape::of::<GetNamespaceRepositoryImagesSummaryResponse>())
}

pub fn image_tags() -> ToolDescriptor {
    ToolDescriptor::new(
        "get_v2_namespaces_namespace_repositories_repository_images_digest_tags",
        Method::Get,
        "/v2/namespaces/{namespace}/repositories/{repository}/images/{digest}/tags",
    )
    .describe("Get image's tags")
    .param(ParamSpec::path("namespace", "Namespace of the repository."))
    .param(ParamSpec::path("repository", "Name of the repository."))
    .param(ParamSpec::path("digest", "Digest of the image."))
    .param(ParamSpec::query(
        "page",
        ParamType::Number,
        "Page number to get. Defaults to 1.",
    ))
    .param(ParamSpec::query(
        "page_size",
        ParamType::Number,
        "Number of images to get per page. Defaults to 10. Max of 100.",
    ))
    .response(ResponseShape::of::<GetNamespaceRepositoryImagesTagsResponse>())
}

pub fn delete_images() -> ToolDescriptor {
    ToolDescriptor::new(
        "post_v2_namespaces_namespace_delete-images",
        Method::Post,
        "/v2/namespaces/{namespace}/delete-images",
    )
    .describe("Delete images")
    .param(ParamSpec::path("namespace", "Namespace of the repository."))
    .param(ParamSpec::body("active_from", ParamType::String, ACTIVE_FROM))
    .param(ParamSpec::body(
        "dry_run",
        ParamType::Boolean,
        "If `true`, check and return errors and unignored warnings for the deletion \
         request without deleting any images.",
    ))
    .param(ParamSpec::body(
        "ignore_warnings",
        ParamType::Array,
        "Warnings to ignore. If a warning is not ignored then no deletions happen and the \
         warning is returned in the response. Warnings are `is_active` (the image is marked \
         active) and `current_tag` (the image has current tags). Warnings can be copied \
         from the response to the request.",
    ))
    .param(ParamSpec::body(
        "manifests",
        ParamType::Array,
        "Image manifests to delete, as `{repository, digest}` objects.",
    ))
    .request(RequestShape::of::<PostNamespacesDeleteImagesRequest>())
    .response(ResponseShape::of::<PostNamespacesDeleteImagesResponse>())
}
