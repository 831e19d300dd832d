use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration or a login is still in flight; show nothing yet
    Pending,
    Redirect(Route),
    Render,
}
