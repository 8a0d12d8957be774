use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};

use crate::config::env_or;

pub fn create_cors() -> rocket_cors::Cors {
    let allowed_origins_env: String =
        env_or("CORS_ALLOWED_ORIGINS", "http://localhost:5173".to_string());

    let allowed_origins: Vec<String> = allowed_origins_env
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let allowed_origins = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(&allowed_origins)
    };

    CorsOptions {
        allowed_origins,
        allowed_methods: [Method::Get, Method::Post, Method::Options]
            .into_iter()
            .map(|m| m.into())
            .collect(),
        allowed_headers: AllowedHeaders::some(&["Accept", "Content-Type", "X-Requested-With"]),
        allow_credentials: false,
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS configuration")
}
