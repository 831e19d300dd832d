pub(crate) mod guard_decision;
pub(crate) mod route;
pub(crate) mod route_guard;

pub use guard_decision::GuardDecision;
pub use route::Route;
pub use route_guard::RouteGuard;
