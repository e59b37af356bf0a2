//! DTOs for the circle and triangle endpoints.

use serde::Deserialize;
use serde_with::serde_as;
use validator::Validate;

use super::coerce::Lenient;

/// Body of `/math/circle/circumference`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CircumferenceRequest {
    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub radius: Option<f64>,
}

/// Body of `/math/circle/radius`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RadiusRequest {
    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub circumference: Option<f64>,
}

/// Body of `/math/triangle/area`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct AreaRequest {
    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub base: Option<f64>,

    #[serde_as(as = "Option<Lenient>")]
    #[validate(required)]
    pub height: Option<f64>,
}
