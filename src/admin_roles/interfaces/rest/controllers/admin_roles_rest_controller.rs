use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::admin_roles::{
    domain::{
        model::{
            commands::{
                apply_admin_roles_command::ApplyAdminRolesCommand,
                delete_admin_roles_command::DeleteAdminRolesCommand,
            },
            enums::admin_roles_domain_error::AdminRolesDomainError,
            queries::{
                import_admin_roles_query::ImportAdminRolesQuery,
                read_admin_roles_query::ReadAdminRolesQuery,
            },
        },
        services::{
            admin_roles_command_service::AdminRolesCommandService,
            admin_roles_query_service::AdminRolesQueryService,
        },
    },
    interfaces::rest::resources::{
        admin_roles_error_response_resource::AdminRolesErrorResponseResource,
        admin_roles_resource::AdminRolesResource,
        admin_roles_target_request_resource::AdminRolesTargetRequestResource,
        apply_admin_roles_request_resource::ApplyAdminRolesRequestResource,
        import_admin_roles_request_resource::ImportAdminRolesRequestResource,
    },
};

type ErrorResponse = (StatusCode, Json<AdminRolesErrorResponseResource>);

#[derive(Clone)]
pub struct AdminRolesRestControllerState {
    pub command_service: Arc<dyn AdminRolesCommandService>,
    pub query_service: Arc<dyn AdminRolesQueryService>,
}

pub fn router(state: AdminRolesRestControllerState) -> Router {
    Router::new()
        .route("/admin-roles/apply", post(apply_admin_roles))
        .route("/admin-roles/read", post(read_admin_roles))
        .route("/admin-roles/delete", post(delete_admin_roles))
        .route("/admin-roles/import", post(import_admin_roles))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/admin-roles/apply",
    tag = "admin-roles",
    request_body = ApplyAdminRolesRequestResource,
    responses(
        (status = 200, description = "Roles reconciled, current state returned", body = AdminRolesResource),
        (status = 400, description = "Invalid request", body = AdminRolesErrorResponseResource),
        (status = 502, description = "Okta API error", body = AdminRolesErrorResponseResource)
    )
)]
pub async fn apply_admin_roles(
    State(state): State<AdminRolesRestControllerState>,
    Json(request): Json<ApplyAdminRolesRequestResource>,
) -> Result<Json<AdminRolesResource>, ErrorResponse> {
    validate_request(&request)?;

    let command =
        ApplyAdminRolesCommand::new(request.target_type, request.target_id, request.admin_roles)
            .map_err(map_domain_error)?;

    let applied = state
        .command_service
        .handle_apply(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(applied.into()))
}

#[utoipa::path(
    post,
    path = "/admin-roles/read",
    tag = "admin-roles",
    request_body = AdminRolesTargetRequestResource,
    responses(
        (status = 200, description = "Current state", body = AdminRolesResource),
        (status = 400, description = "Invalid request", body = AdminRolesErrorResponseResource),
        (status = 502, description = "Okta API error", body = AdminRolesErrorResponseResource)
    )
)]
pub async fn read_admin_roles(
    State(state): State<AdminRolesRestControllerState>,
    Json(request): Json<AdminRolesTargetRequestResource>,
) -> Result<Json<AdminRolesResource>, ErrorResponse> {
    validate_request(&request)?;

    let query = ReadAdminRolesQuery::new(request.target_type, request.target_id)
        .map_err(map_domain_error)?;

    let current = state
        .query_service
        .handle_read(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(current.into()))
}

#[utoipa::path(
    post,
    path = "/admin-roles/delete",
    tag = "admin-roles",
    request_body = AdminRolesTargetRequestResource,
    responses(
        (status = 204, description = "All admin roles removed from the target"),
        (status = 400, description = "Invalid request", body = AdminRolesErrorResponseResource),
        (status = 502, description = "Okta API error", body = AdminRolesErrorResponseResource)
    )
)]
pub async fn delete_admin_roles(
    State(state): State<AdminRolesRestControllerState>,
    Json(request): Json<AdminRolesTargetRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    validate_request(&request)?;

    let command = DeleteAdminRolesCommand::new(request.target_type, request.target_id)
        .map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin-roles/import",
    tag = "admin-roles",
    request_body = ImportAdminRolesRequestResource,
    responses(
        (status = 200, description = "Imported state", body = AdminRolesResource),
        (status = 400, description = "Invalid request", body = AdminRolesErrorResponseResource),
        (status = 502, description = "Okta API error", body = AdminRolesErrorResponseResource)
    )
)]
pub async fn import_admin_roles(
    State(state): State<AdminRolesRestControllerState>,
    Json(request): Json<ImportAdminRolesRequestResource>,
) -> Result<Json<AdminRolesResource>, ErrorResponse> {
    validate_request(&request)?;

    let query = ImportAdminRolesQuery::new(request.import_id).map_err(map_domain_error)?;

    let imported = state
        .query_service
        .handle_import(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(imported.into()))
}

fn validate_request(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(AdminRolesErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: AdminRolesDomainError) -> ErrorResponse {
    let status = match error {
        AdminRolesDomainError::InvalidTargetId
        | AdminRolesDomainError::InvalidTargetType(_)
        | AdminRolesDomainError::InvalidRole(_)
        | AdminRolesDomainError::InvalidAssignmentId
        | AdminRolesDomainError::InvalidImportId(_) => StatusCode::BAD_REQUEST,
        AdminRolesDomainError::Remote { .. } => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(AdminRolesErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
