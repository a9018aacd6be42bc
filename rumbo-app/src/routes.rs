use rumbo_session::{Capability, RouteGuard};

/// Client-visible routes. Unknown paths collapse to home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Flights,
    Checkout,
    MyFlights,
    Favorites,
    Admin,
    AdminFlights,
    AdminAccounts,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match trimmed {
            "/" => Route::Home,
            "/flights" => Route::Flights,
            "/checkout" => Route::Checkout,
            "/myFlights" => Route::MyFlights,
            "/favorites" => Route::Favorites,
            "/admin" => Route::Admin,
            "/admin/flights" => Route::AdminFlights,
            "/admin/accounts" => Route::AdminAccounts,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Flights => "/flights",
            Route::Checkout => "/checkout",
            Route::MyFlights => "/myFlights",
            Route::Favorites => "/favorites",
            Route::Admin => "/admin",
            Route::AdminFlights => "/admin/flights",
            Route::AdminAccounts => "/admin/accounts",
        }
    }

    /// What it takes to see this page. `None` means public.
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            Route::Home | Route::Flights => None,
            Route::Checkout | Route::MyFlights | Route::Favorites => Some(Capability::UserOnly),
            Route::Admin | Route::AdminAccounts => Some(Capability::AdminOnly),
            Route::AdminFlights => Some(Capability::AirlineOrAdmin),
        }
    }

    /// A fresh guard for mounting this route, if it is protected.
    pub fn guard(&self) -> Option<RouteGuard> {
        self.required_capability().map(RouteGuard::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumbo_session::GuardDecision;
    use rumbo_shared::Role;

    #[test]
    fn test_known_paths_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/flights"), Route::Flights);
        assert_eq!(Route::parse("/myFlights"), Route::MyFlights);
        assert_eq!(Route::parse("/admin/accounts"), Route::AdminAccounts);
        assert_eq!(Route::parse("/admin/flights/"), Route::AdminFlights);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/no-such-page"), Route::Home);
        assert_eq!(Route::parse("/admin/secrets"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_paths_roundtrip() {
        for route in [
            Route::Home,
            Route::Flights,
            Route::Checkout,
            Route::MyFlights,
            Route::Favorites,
            Route::Admin,
            Route::AdminFlights,
            Route::AdminAccounts,
        ] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn test_public_routes_have_no_guard() {
        assert!(Route::Home.guard().is_none());
        assert!(Route::Flights.guard().is_none());
    }

    #[test]
    fn test_admin_route_guards_anonymous_visitor() {
        let mut guard = Route::Admin.guard().expect("admin route must be guarded");
        assert_eq!(
            guard.evaluate(None),
            GuardDecision::RedirectHome { prompt_login: true }
        );
    }

    #[test]
    fn test_airline_reaches_flight_panel_but_not_accounts() {
        let mut flights = Route::AdminFlights.guard().unwrap();
        assert_eq!(flights.evaluate(Some(Role::Airline)), GuardDecision::Render);

        let mut accounts = Route::AdminAccounts.guard().unwrap();
        assert_eq!(
            accounts.evaluate(Some(Role::Airline)),
            GuardDecision::RedirectHome { prompt_login: false }
        );
    }
}
