//! Static Docker Hub endpoint definitions.

mod access_tokens;
mod audit_logs;
mod authentication;
mod images;
mod org_settings;
mod repositories;

use crate::descriptor::ToolDescriptor;

/// Every endpoint exposed as a tool.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        audit_logs::get_audit_logs(),
        images::list_images(),
        authentication::login_2fa(),
        repositories::check_tag(),
        repositories::get_tag(),
        audit_logs::get_audit_actions(),
        images::image_tags(),
        access_tokens::update_token(),
        access_tokens::delete_token(),
        access_tokens::get_token(),
        repositories::list_tags(),
        repositories::check_tags(),
        org_settings::get_settings(),
        org_settings::update_settings(),
        authentication::login(),
        images::images_summary(),
        access_tokens::list_tokens(),
        access_tokens::create_token(),
        images::delete_images(),
    ]
}
