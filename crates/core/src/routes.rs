//! Route table and the protected-route gate

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const CREATE_HOTEL_PATH: &str = "/create-hotel";

/// Per-hotel screens rendered inside the shared layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotelPage {
    Dashboard,
    Rooms,
    Guests,
    Notifications,
    Feedback,
    Settings,
    ConfigureDisplay,
    Calendar,
    Users,
    CleanRequests,
    TechnicalIssues,
    Reservations,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown hotel page: {0}")]
pub struct UnknownPage(pub String);

impl HotelPage {
    /// Navigation order
    pub const ALL: [Self; 12] = [
        Self::Dashboard,
        Self::Rooms,
        Self::Guests,
        Self::Reservations,
        Self::Calendar,
        Self::CleanRequests,
        Self::TechnicalIssues,
        Self::Feedback,
        Self::Notifications,
        Self::Users,
        Self::ConfigureDisplay,
        Self::Settings,
    ];

    /// Path segment after `/hotel/:hotelId/`
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Rooms => "rooms",
            Self::Guests => "guests",
            Self::Notifications => "notifications",
            Self::Feedback => "feedback",
            Self::Settings => "settings",
            Self::ConfigureDisplay => "configure-display",
            Self::Calendar => "calendar",
            Self::Users => "users",
            Self::CleanRequests => "clean-requests",
            Self::TechnicalIssues => "technical-issues",
            Self::Reservations => "reservations",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Rooms => "Rooms",
            Self::Guests => "Guests",
            Self::Notifications => "Notifications",
            Self::Feedback => "Feedback",
            Self::Settings => "Settings",
            Self::ConfigureDisplay => "Configure Display",
            Self::Calendar => "Calendar",
            Self::Users => "Users",
            Self::CleanRequests => "Clean Requests",
            Self::TechnicalIssues => "Technical Issues",
            Self::Reservations => "Reservations",
        }
    }
}

impl fmt::Display for HotelPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for HotelPage {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Every path the console recognizes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Root,
    CreateHotel,
    Hotel { hotel_id: String, page: HotelPage },
    NotFound,
}

impl Route {
    pub fn hotel(hotel_id: impl Into<String>, page: HotelPage) -> Self {
        Self::Hotel {
            hotel_id: hotel_id.into(),
            page,
        }
    }

    /// Match a location path against the route table.
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        let segments: Vec<&str> = path.split('/').skip(1).collect();
        match segments.as_slice() {
            [""] => Self::Root,
            ["sign-in"] => Self::SignIn,
            ["create-hotel"] => Self::CreateHotel,
            ["hotel", hotel_id, page] if !hotel_id.is_empty() => page
                .parse()
                .map_or(Self::NotFound, |page| Self::hotel(*hotel_id, page)),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::SignIn => SIGN_IN_PATH.to_string(),
            Self::Root => "/".to_string(),
            Self::CreateHotel => CREATE_HOTEL_PATH.to_string(),
            Self::Hotel { hotel_id, page } => format!("/hotel/{hotel_id}/{page}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Whether the route requires an authenticated session
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::CreateHotel | Self::Hotel { .. })
    }
}

/// What the router shows for a route once redirects are settled
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    CreateHotel,
    Hotel { hotel_id: String, page: HotelPage },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    /// Replace the current history entry with this route
    Redirect(Route),
}

/// Protected-route gate: where to send a visitor who may not see protected
/// content, or `None` to render it.
pub const fn guard(authenticated: bool) -> Option<Route> {
    if authenticated {
        None
    } else {
        Some(Route::SignIn)
    }
}

/// Catch-all target for paths outside the route table
pub const fn fallback(authenticated: bool) -> Route {
    if authenticated {
        Route::CreateHotel
    } else {
        Route::SignIn
    }
}

/// Decide what to do with `route` given the authentication state
pub fn resolve(route: &Route, authenticated: bool) -> Resolution {
    if route.is_protected()
        && let Some(redirect) = guard(authenticated)
    {
        return Resolution::Redirect(redirect);
    }

    match route {
        Route::SignIn => Resolution::Render(Screen::SignIn),
        Route::Root => Resolution::Redirect(Route::SignIn),
        Route::CreateHotel => Resolution::Render(Screen::CreateHotel),
        Route::Hotel { hotel_id, page } => Resolution::Render(Screen::Hotel {
            hotel_id: hotel_id.clone(),
            page: *page,
        }),
        Route::NotFound => Resolution::Redirect(fallback(authenticated)),
    }
}

/// History navigation performed by the session flow
pub trait Navigate {
    /// Replace the current history entry with `path`
    fn replace(&self, path: &str);
}
