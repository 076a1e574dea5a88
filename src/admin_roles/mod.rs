use std::{sync::Arc, time::Duration};

use axum::Router;

use crate::{
    admin_roles::{
        application::{
            command_services::admin_roles_command_service_impl::AdminRolesCommandServiceImpl,
            query_services::admin_roles_query_service_impl::AdminRolesQueryServiceImpl,
            reconciliation::role_reconciler::RoleReconciler,
        },
        infrastructure::okta::clients::http::reqwest_role_assignment_client_impl::ReqwestRoleAssignmentClientImpl,
        interfaces::rest::controllers::admin_roles_rest_controller::{
            AdminRolesRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_admin_roles_router(config: &AppConfig) -> Result<Router, String> {
    if config.okta_api_token.trim().is_empty() {
        return Err("OKTA_API_TOKEN must be set".to_string());
    }

    let client = Arc::new(
        ReqwestRoleAssignmentClientImpl::new(
            &config.okta_api_base_url()?,
            config.okta_api_token.clone(),
            Duration::from_secs(config.okta_request_timeout_secs),
        )
        .map_err(|e| e.to_string())?,
    );

    let reconciler = Arc::new(RoleReconciler::new(client));

    let command_service = Arc::new(AdminRolesCommandServiceImpl::new(reconciler.clone()));
    let query_service = Arc::new(AdminRolesQueryServiceImpl::new(reconciler));

    Ok(router(AdminRolesRestControllerState {
        command_service,
        query_service,
    }))
}
