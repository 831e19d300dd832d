mod new_user;
mod public_user;
mod user_role;
