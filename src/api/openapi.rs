//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, calendar, clients, equipments, health, materials, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vigifeu API",
        version = "1.0.0",
        description = "Fire Safety Equipment Maintenance REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Vigifeu Team")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::signup,
        auth::me,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Equipments
        equipments::list_client_equipments,
        equipments::create_equipment,
        equipments::get_equipment,
        equipments::update_equipment,
        equipments::delete_equipment,
        // Materials
        materials::list_materials,
        materials::get_material,
        materials::create_material,
        materials::update_material,
        materials::delete_material,
        // Calendar
        calendar::get_calendar,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::user::UserInfo,
            crate::models::user::CreateUser,
            // Clients
            crate::models::client::Client,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            clients::ClientDetail,
            // Equipments
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            equipments::EquipmentEvaluated,
            // Materials
            crate::models::material::Material,
            crate::models::material::CreateMaterial,
            crate::models::material::UpdateMaterial,
            crate::models::enums::MaterialType,
            crate::models::enums::RechargeType,
            // Compliance
            crate::compliance::TrackStatus,
            crate::compliance::ControlStatus,
            crate::compliance::RechargeStatus,
            crate::compliance::Severity,
            crate::compliance::EquipmentStatus,
            crate::compliance::calendar::ActionType,
            crate::compliance::calendar::Action,
            crate::compliance::calendar::ClientActions,
            // Stats
            stats::ClientStats,
            stats::EquipmentStats,
            stats::SeverityStats,
            stats::MaterialStats,
            stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "clients", description = "Client management"),
        (name = "equipments", description = "Equipment management"),
        (name = "materials", description = "Material template management"),
        (name = "calendar", description = "Monthly action calendar"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
