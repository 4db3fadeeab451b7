//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use crate::types::{PaginatedUsers, PaginationMeta};
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "CRUD operations over users"),
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::get_user_by_email,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            CreateUserRequest,
            UpdateUserRequest,
            PaginatedUsers,
            PaginationMeta,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Liveness and dependency checks"),
    )
)]
pub struct ApiDoc;
