//! Routes, active-link matching and the collapsible menu

use crate::state::FormKind;

/// A page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Services,
    About,
    Contact,
    Booking,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Services,
        Route::About,
        Route::Contact,
        Route::Booking,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Booking => "/booking",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Booking => "Booking",
        }
    }

    /// Label of the page's own breadcrumb
    pub fn crumb_label(self) -> &'static str {
        match self {
            Route::Booking => "Book Your Service",
            other => other.title(),
        }
    }

    /// Resolve a path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// The lead-capture form shown on this page, if any
    pub fn form(self) -> Option<FormKind> {
        match self {
            Route::Contact => Some(FormKind::Contact),
            Route::Booking => Some(FormKind::Booking),
            _ => None,
        }
    }
}

/// An entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
    /// Rendered as the highlighted call-to-action button
    pub is_cta: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        route: Route::Home,
        is_cta: false,
    },
    NavItem {
        name: "Services",
        route: Route::Services,
        is_cta: false,
    },
    NavItem {
        name: "About",
        route: Route::About,
        is_cta: false,
    },
    NavItem {
        name: "Contact",
        route: Route::Contact,
        is_cta: false,
    },
    NavItem {
        name: "Book Now",
        route: Route::Booking,
        is_cta: true,
    },
];

/// Whether `href` is the active link for `current_path`.
///
/// The root only matches exactly; every other link matches by prefix.
pub fn is_active_path(current_path: &str, href: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(href)
    }
}

/// Current location plus the narrow-layout menu toggle
#[derive(Debug, Clone)]
pub struct NavState {
    current_path: String,
    pub mobile_menu_open: bool,
    /// Highlighted entry while the menu is open
    pub menu_index: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            current_path: Route::Home.path().to_string(),
            mobile_menu_open: false,
            menu_index: 0,
        }
    }
}

impl NavState {
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_route(&self) -> Route {
        Route::from_path(&self.current_path).unwrap_or_default()
    }

    pub fn is_active(&self, href: &str) -> bool {
        is_active_path(&self.current_path, href)
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        if self.mobile_menu_open {
            self.menu_index = NAV_ITEMS
                .iter()
                .position(|item| self.is_active(item.route.path()))
                .unwrap_or(0);
        }
    }

    /// Go to `route`; choosing a target always closes the menu
    pub fn navigate(&mut self, route: Route) {
        self.current_path = route.path().to_string();
        self.mobile_menu_open = false;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % NAV_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        if self.menu_index == 0 {
            self.menu_index = NAV_ITEMS.len() - 1;
        } else {
            self.menu_index -= 1;
        }
    }

    /// Route of the highlighted menu entry
    pub fn menu_selection(&self) -> Route {
        NAV_ITEMS
            .get(self.menu_index)
            .map(|item| item.route)
            .unwrap_or_default()
    }

    /// Next page in nav order, wrapping
    pub fn next_route(&self) -> Route {
        let current = self.current_route();
        let idx = Route::ALL.iter().position(|r| *r == current).unwrap_or(0);
        Route::ALL[(idx + 1) % Route::ALL.len()]
    }

    /// Previous page in nav order, wrapping
    pub fn prev_route(&self) -> Route {
        let current = self.current_route();
        let idx = Route::ALL.iter().position(|r| *r == current).unwrap_or(0);
        Route::ALL[(idx + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

/// A breadcrumb segment; only non-last crumbs link anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub route: Option<Route>,
}

/// Trail from the home page to `route`
pub fn breadcrumbs(route: Route) -> Vec<Crumb> {
    match route {
        Route::Home => vec![Crumb {
            label: Route::Home.title(),
            route: None,
        }],
        other => vec![
            Crumb {
                label: Route::Home.title(),
                route: Some(Route::Home),
            },
            Crumb {
                label: other.crumb_label(),
                route: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(route: Route) -> NavState {
        let mut nav = NavState::default();
        nav.navigate(route);
        nav
    }

    mod active_link {
        use super::*;

        #[test]
        fn test_services_path() {
            let nav = at(Route::Services);
            assert!(nav.is_active("/services"));
            assert!(!nav.is_active("/"));
            assert!(!nav.is_active("/contact"));
        }

        #[test]
        fn test_root_path() {
            let nav = NavState::default();
            assert_eq!(nav.current_path(), "/");
            assert!(nav.is_active("/"));
            assert!(!nav.is_active("/services"));
        }

        #[test]
        fn test_nested_path_matches_by_prefix() {
            assert!(is_active_path("/services/welding", "/services"));
            assert!(!is_active_path("/services/welding", "/"));
        }
    }

    mod mobile_menu {
        use super::*;

        #[test]
        fn test_toggle_opens_and_closes() {
            let mut nav = NavState::default();
            assert!(!nav.mobile_menu_open);
            nav.toggle_mobile_menu();
            assert!(nav.mobile_menu_open);
            nav.toggle_mobile_menu();
            assert!(!nav.mobile_menu_open);
        }

        #[test]
        fn test_navigate_closes_menu() {
            let mut nav = NavState::default();
            nav.toggle_mobile_menu();
            nav.navigate(Route::About);
            assert!(!nav.mobile_menu_open);
            assert_eq!(nav.current_route(), Route::About);
        }

        #[test]
        fn test_opening_highlights_active_entry() {
            let mut nav = at(Route::Contact);
            nav.toggle_mobile_menu();
            assert_eq!(nav.menu_selection(), Route::Contact);
        }

        #[test]
        fn test_menu_selection_wraps() {
            let mut nav = NavState::default();
            nav.toggle_mobile_menu();
            nav.menu_prev();
            assert_eq!(nav.menu_selection(), Route::Booking);
            nav.menu_next();
            assert_eq!(nav.menu_selection(), Route::Home);
        }
    }

    mod routes {
        use super::*;

        #[test]
        fn test_paths() {
            let paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
            assert_eq!(
                paths,
                vec!["/", "/services", "/about", "/contact", "/booking"]
            );
        }

        #[test]
        fn test_from_path_round_trips_and_rejects_unknown() {
            for route in Route::ALL {
                assert_eq!(Route::from_path(route.path()), Some(route));
            }
            assert_eq!(Route::from_path("/contact/"), Some(Route::Contact));
            assert_eq!(Route::from_path("/pricing"), None);
        }

        #[test]
        fn test_forms_live_on_contact_and_booking() {
            assert_eq!(Route::Contact.form(), Some(FormKind::Contact));
            assert_eq!(Route::Booking.form(), Some(FormKind::Booking));
            assert_eq!(Route::Home.form(), None);
        }

        #[test]
        fn test_next_and_prev_wrap() {
            assert_eq!(at(Route::Booking).next_route(), Route::Home);
            assert_eq!(NavState::default().prev_route(), Route::Booking);
            assert_eq!(NavState::default().next_route(), Route::Services);
        }

        #[test]
        fn test_book_now_is_the_only_cta() {
            let ctas: Vec<&NavItem> = NAV_ITEMS.iter().filter(|i| i.is_cta).collect();
            assert_eq!(ctas.len(), 1);
            assert_eq!(ctas[0].route, Route::Booking);
        }
    }

    mod crumbs {
        use super::*;

        #[test]
        fn test_home_has_single_unlinked_crumb() {
            let crumbs = breadcrumbs(Route::Home);
            assert_eq!(crumbs.len(), 1);
            assert_eq!(crumbs[0].route, None);
        }

        #[test]
        fn test_page_links_back_home() {
            let crumbs = breadcrumbs(Route::Booking);
            assert_eq!(
                crumbs,
                vec![
                    Crumb {
                        label: "Home",
                        route: Some(Route::Home)
                    },
                    Crumb {
                        label: "Book Your Service",
                        route: None
                    },
                ]
            );
        }
    }
}
