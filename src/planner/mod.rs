//! Route planning state: the ordered list of user-placed waypoints and the
//! operations the user performs on it before export.

pub mod planner;

pub use planner::{PlannerError, RoutePlanner};
