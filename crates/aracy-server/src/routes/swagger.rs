//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AlintResponse,
    AstroPlacements,
    // Bond models
    BondLinkRequest,
    BondLinkResponse,
    BondNameResponse,
    // Context models
    ContextResponse,
    // Vault models
    CrystallizeItem,
    CrystallizeRequest,
    CrystallizeResponse,
    // Log models
    ErrorLogEntryResponse,
    ErrorLogResponse,
    ErrorResponse,
    // Footprint models
    FootprintResponse,
    // Lab models
    GenerateRequest,
    GenerateResponse,
    // Health models
    HealthCheck,
    IgnoreLogResponse,
    VaultResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        super::health::health_check,
        // Lab endpoints
        super::lab::generate_alints,
        // Vault endpoints
        super::vault::crystallize_alints,
        super::vault::get_vault,
        // Log endpoints
        super::logs::list_errors,
        super::logs::ignore_error,
        // Context endpoints
        super::context::get_context,
        // Bond endpoints
        super::bond::link_bond,
        super::bond::name_bond,
        // Footprint endpoints
        super::footprint::resource_footprint,
    ),
    info(
        title = "ARACY API",
        version = "0.1.0",
        description = "Mirror Lab backend - generates the 19 alints and keeps the crystallized vault.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Lab", description = "Lab - Alint generation"),
        (name = "Vault", description = "Vault - Crystallized and remembered alints"),
        (name = "Logs", description = "Logs - Reviewable error log"),
        (name = "Context", description = "Context - Muse profile"),
        (name = "Bond", description = "Bond - Partner linking and naming"),
        (name = "Footprint", description = "Footprint - Process resource usage"),
    ),
    components(
        schemas(
            ErrorResponse,
            HealthCheck,
            // Lab
            GenerateRequest,
            GenerateResponse,
            // Vault
            CrystallizeItem,
            CrystallizeRequest,
            CrystallizeResponse,
            AlintResponse,
            VaultResponse,
            // Logs
            ErrorLogEntryResponse,
            ErrorLogResponse,
            IgnoreLogResponse,
            // Context
            AstroPlacements,
            ContextResponse,
            // Bond
            BondLinkRequest,
            BondLinkResponse,
            BondNameResponse,
            // Footprint
            FootprintResponse,
        )
    ),
)]
pub struct ApiDoc;
