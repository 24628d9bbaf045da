use serde::{Deserialize, Serialize};

use crate::model::RouteMeasurement;

/// everything collected during one sampling round, before it is assembled into a
/// [`super::Sample`]. either measurement may be missing when the routing
/// collaborator failed or its output could not be read; the reasons are kept
/// in `errors` for reporting.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawRound {
    pub traffic_aware: Option<RouteMeasurement>,
    pub traffic_unaware: Option<RouteMeasurement>,
    pub errors: Vec<String>,
}

impl RawRound {
    /// a round where nothing could be measured.
    pub fn failed(errors: Vec<String>) -> RawRound {
        RawRound {
            traffic_aware: None,
            traffic_unaware: None,
            errors,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.traffic_aware.is_none() || self.traffic_unaware.is_none()
    }
}
