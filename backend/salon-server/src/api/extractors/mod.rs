pub mod bearer_claims;
pub mod client_addr;
