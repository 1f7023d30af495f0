//! Integration tests for the role-based login redirect.

use handloom_core::Role;
use handloom_storefront::{Destination, Navigator, redirect_target, submit_login};

#[derive(Default)]
struct History(Vec<String>);

impl Navigator for History {
    fn navigate(&mut self, path: &str) {
        self.0.push(path.to_string());
    }
}

#[test]
fn test_every_role_has_a_dashboard() {
    for role in Role::ALL {
        let destination = redirect_target(role.as_str());
        assert_eq!(destination, Destination::from(role));
    }
}

#[test]
fn test_submit_navigates_once() {
    let mut history = History::default();

    let destination = submit_login("marketing", &mut history);

    assert_eq!(destination, Destination::MarketingDashboard);
    assert_eq!(history.0, vec!["marketing-dashboard.html"]);
}

#[test]
fn test_unknown_role_lands_on_buyer_dashboard() {
    let mut history = History::default();
    submit_login("", &mut history);
    submit_login("ARTISAN", &mut history);

    assert_eq!(history.0, vec!["buyer-dashboard.html", "buyer-dashboard.html"]);
}
