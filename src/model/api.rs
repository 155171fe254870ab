use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of the `/health` endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthDto {
    /// `"ok"` when every dependency is reachable, otherwise `"degraded"`.
    pub status: String,
    /// `"up"` or `"down"` depending on a database ping.
    pub database: String,
}
