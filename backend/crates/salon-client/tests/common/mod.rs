#![allow(dead_code)]

use serde_json::{Value, json};

pub const TOKEN: &str = "header.payload.signature";

pub fn user_json() -> Value {
    json!({
        "id": "1",
        "name": "Ana",
        "email": "ana@example.com",
        "role": "cliente"
    })
}

pub fn auth_body() -> Value {
    json!({ "success": true, "token": TOKEN, "user": user_json() })
}

pub fn error_body(code: &str, message: &str) -> Value {
    json!({ "success": false, "code": code, "message": message })
}

/// A localhost port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
