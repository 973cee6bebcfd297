//! Client-side route paths and the header navigation list.

use serde::Serialize;

pub const HOME_PATH: &str = "/";
pub const PLAN_TRIP_PATH: &str = "/plan";
pub const ITINERARY_PATH: &str = "/itinerary";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { name: "Home", path: HOME_PATH },
        NavItem { name: "Plan Trip", path: PLAN_TRIP_PATH },
        NavItem { name: "Dashboard", path: DASHBOARD_PATH },
        NavItem { name: "Profile", path: PROFILE_PATH },
    ]
}
