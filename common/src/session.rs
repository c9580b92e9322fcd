//! Login, session value and the route guard.
//!
//! The session is an explicit value owned by the root of the app and handed
//! down through context: created by [`login`], dropped on logout, consulted by
//! [`guard`] on every navigation. Nothing is written to browser storage.

use crate::error::LoginError;

pub const DEMO_EMAIL: &str = "admin@gmail.com";
pub const DEMO_PASSWORD: &str = "123456";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

pub fn login(email: &str, password: &str) -> Result<Session, LoginError> {
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(Session {
            email: email.to_string(),
        })
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Certificates,
}

impl Route {
    /// Entries of the sidebar menu, in display order.
    pub const MENU: [Route; 2] = [Route::Dashboard, Route::Certificates];

    /// Maps a location path to a route; unknown paths land on the login page.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/dashboard" => Route::Dashboard,
            "/certificates" => Route::Certificates,
            _ => Route::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Certificates => "/certificates",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Certificates => "Certificates",
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Route actually shown for `requested` given the current session.
pub fn guard(requested: Route, session: Option<&Session>) -> Route {
    if requested.is_protected() && session.is_none() {
        Route::Login
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_open_a_session() {
        let session = login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(session.email, "admin@gmail.com");
    }

    #[test]
    fn other_credentials_are_rejected() {
        assert_eq!(login("admin@gmail.com", "654321"), Err(LoginError::InvalidCredentials));
        assert_eq!(login("ADMIN@gmail.com", "123456"), Err(LoginError::InvalidCredentials));
        assert_eq!(login("", "123456"), Err(LoginError::MissingFields));
        assert_eq!(
            login("someone@example.com", "x").unwrap_err().to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/certificates"), Route::Certificates);
        assert_eq!(Route::from_path("/nope"), Route::Login);
        for route in Route::MENU {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn guard_requires_a_session_for_protected_routes() {
        let session = login(DEMO_EMAIL, DEMO_PASSWORD).ok();
        assert_eq!(guard(Route::Dashboard, None), Route::Login);
        assert_eq!(guard(Route::Certificates, None), Route::Login);
        assert_eq!(guard(Route::Login, None), Route::Login);
        assert_eq!(guard(Route::Dashboard, session.as_ref()), Route::Dashboard);
        assert_eq!(guard(Route::Login, session.as_ref()), Route::Login);
    }
}
