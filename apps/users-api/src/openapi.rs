use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "REST API for managing user accounts"
    ),
    nest((path = "/v1/users", api = domain_users::ApiDoc))
)]
pub struct ApiDoc;
