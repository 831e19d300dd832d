use salon_core::UserRole;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "SALON_PASSWORD", hide_env_values = true)]
        password: String,

        /// Defaults to --password
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Sign in and keep the token for later commands
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "SALON_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Restore the session from the stored token and show the user
    Whoami,

    /// Check whether the dashboard would be shown
    Dashboard {
        /// Only allow users with this role (cliente, peluquera, admin)
        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
    },

    /// Fetch the current user with the stored token
    Me,
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    s.parse::<UserRole>()
        .map_err(|_| format!("unknown role '{s}', expected cliente, peluquera or admin"))
}
