use crate::{Role, Session};

/// Logical targets of the client-visible routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Manager,
    Deliverer,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Destination),
}

#[must_use]
pub fn home_destination(role: Role) -> Destination {
    match role {
        Role::Manager => Destination::Manager,
        Role::Deliverer => Destination::Deliverer,
        Role::User => Destination::User,
    }
}

/// Decides whether a requested destination may be rendered for the given
/// session.
///
/// Without a session only the login screen is reachable. With a session only
/// the dashboard of the session's role is reachable; every other destination,
/// including the login screen, redirects there.
#[must_use]
pub fn route_decision(session: Option<&Session>, requested: Destination) -> RouteDecision {
    let Some(session) = session else {
        return if requested == Destination::Login {
            RouteDecision::Allow
        } else {
            RouteDecision::Redirect(Destination::Login)
        };
    };

    let home = home_destination(session.role);

    if requested == home {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(home)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Username;

    fn session(role: Role) -> Session {
        Session {
            username: Username::new("alice").unwrap(),
            role,
        }
    }

    #[rstest]
    #[case(Role::Manager, Destination::Manager)]
    #[case(Role::Deliverer, Destination::Deliverer)]
    #[case(Role::User, Destination::User)]
    fn test_home_destination(#[case] role: Role, #[case] expected: Destination) {
        assert_eq!(home_destination(role), expected);
    }

    #[rstest]
    #[case(Destination::Login, RouteDecision::Allow)]
    #[case(Destination::Manager, RouteDecision::Redirect(Destination::Login))]
    #[case(Destination::Deliverer, RouteDecision::Redirect(Destination::Login))]
    #[case(Destination::User, RouteDecision::Redirect(Destination::Login))]
    fn test_route_decision_without_session(
        #[case] requested: Destination,
        #[case] expected: RouteDecision,
    ) {
        assert_eq!(route_decision(None, requested), expected);
    }

    #[rstest]
    #[case(Role::Manager, Destination::Manager, RouteDecision::Allow)]
    #[case(Role::Manager, Destination::Deliverer, RouteDecision::Redirect(Destination::Manager))]
    #[case(Role::Manager, Destination::User, RouteDecision::Redirect(Destination::Manager))]
    #[case(Role::Manager, Destination::Login, RouteDecision::Redirect(Destination::Manager))]
    #[case(Role::Deliverer, Destination::Deliverer, RouteDecision::Allow)]
    #[case(Role::Deliverer, Destination::Manager, RouteDecision::Redirect(Destination::Deliverer))]
    #[case(Role::Deliverer, Destination::User, RouteDecision::Redirect(Destination::Deliverer))]
    #[case(Role::User, Destination::User, RouteDecision::Allow)]
    #[case(Role::User, Destination::Manager, RouteDecision::Redirect(Destination::User))]
    #[case(Role::User, Destination::Deliverer, RouteDecision::Redirect(Destination::User))]
    fn test_route_decision_with_session(
        #[case] role: Role,
        #[case] requested: Destination,
        #[case] expected: RouteDecision,
    ) {
        assert_eq!(route_decision(Some(&session(role)), requested), expected);
    }
}
