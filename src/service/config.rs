use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: String,
    pub music_info_url: String,
    pub music_info_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Self {
        Self {
            database_url: required("DATABASE_URL"),
            server_port: required("SERVER_PORT"),
            music_info_url: required("MUSIC_INFO_URL"),
            music_info_timeout_secs: seconds("MUSIC_INFO_TIMEOUT_SECS", 5),
            request_timeout_secs: seconds("REQUEST_TIMEOUT_SECS", 10),
        }
    }
}

fn required(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("Env {key} not set"))
}

fn seconds(key: &str, default: u64) -> u64 {
    env::var(key).map_or(default, |value| {
        value
            .parse()
            .unwrap_or_else(|_| panic!("Env {key} must be an integer"))
    })
}
