//! Bond - partner linking

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BondLinkRequest {
    #[schema(example = "DEMO123")]
    pub bond_code: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BondLinkResponse {
    pub status: String,
    pub bond_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BondNameResponse {
    #[schema(example = "COVALENT STARDUST")]
    pub bond_name: String,
}
