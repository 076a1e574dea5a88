use axum::Router;
use dotenvy::dotenv;
use okta_admin_roles::{
    admin_roles::{
        build_admin_roles_router,
        interfaces::rest::resources::{
            admin_roles_error_response_resource::AdminRolesErrorResponseResource,
            admin_roles_resource::AdminRolesResource,
            admin_roles_target_request_resource::AdminRolesTargetRequestResource,
            apply_admin_roles_request_resource::ApplyAdminRolesRequestResource,
            import_admin_roles_request_resource::ImportAdminRolesRequestResource,
        },
    },
    config::app_config::AppConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        okta_admin_roles::admin_roles::interfaces::rest::controllers::admin_roles_rest_controller::apply_admin_roles,
        okta_admin_roles::admin_roles::interfaces::rest::controllers::admin_roles_rest_controller::read_admin_roles,
        okta_admin_roles::admin_roles::interfaces::rest::controllers::admin_roles_rest_controller::delete_admin_roles,
        okta_admin_roles::admin_roles::interfaces::rest::controllers::admin_roles_rest_controller::import_admin_roles
    ),
    components(
        schemas(
            ApplyAdminRolesRequestResource,
            AdminRolesTargetRequestResource,
            ImportAdminRolesRequestResource,
            AdminRolesResource,
            AdminRolesErrorResponseResource
        )
    ),
    tags(
        (name = "admin-roles", description = "Okta administrator role assignments for users and groups")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let admin_roles_router =
        build_admin_roles_router(&config).expect("failed to build admin roles router");

    let app = Router::new()
        .merge(admin_roles_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(%addr, "admin roles provider listening");
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
