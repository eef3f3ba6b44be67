//! Waypoint Detection Application Layer (UseCase)

mod waypoint_usecase;

pub use waypoint_usecase::{
    WaypointAuditInput, WaypointAuditOutput, WaypointAuditStats, WaypointAuditUseCase,
    WaypointAuditUseCaseImpl,
};
