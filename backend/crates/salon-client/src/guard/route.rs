/// Screens the guard can send someone to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/auth/signin",
            Route::Dashboard => "/dashboard",
        }
    }
}
