//! Role-based routing. Only the `admin` role gets the admin dashboard; any
//! other value, empty or unexpected included, lands on the standard user
//! dashboard. A completed registration always goes back to the login page.

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    AdminDashboard,
    UserDashboard,
    Login,
}

impl Destination {
    /// Page the front end navigates to for this destination.
    #[must_use]
    pub fn page(&self) -> &'static str {
        match self {
            Self::AdminDashboard => "dashboard_admin.html",
            Self::UserDashboard => "dashboard_user.html",
            Self::Login => "login.html",
        }
    }
}

#[must_use]
pub fn route_after_login(role: &str) -> Destination {
    if role == ADMIN_ROLE {
        Destination::AdminDashboard
    } else {
        Destination::UserDashboard
    }
}

#[must_use]
pub fn route_after_register() -> Destination {
    Destination::Login
}
