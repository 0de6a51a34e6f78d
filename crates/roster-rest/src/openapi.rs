//! OpenAPI documentation configuration.
//!
//! The upstream service exposed interactive API docs out of the box; this
//! module reproduces that surface with utoipa and Swagger UI.

use crate::controllers::health_controller::HealthResponse;
use roster_core::{ErrorResponse, UserId};
use roster_service::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "CRUD HTTP service for managing user records",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            UserId,
            ErrorResponse,
            // User DTOs
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            MessageResponse,
            // Health
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
