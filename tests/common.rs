#![allow(dead_code)] // not every test binary uses every helper

use hyperswitch::HyperswitchClient;
use wiremock::MockServer;

pub const SECRET_KEY: &str = "sk_test_secret";
pub const PUBLISHABLE_KEY: &str = "pk_test_publishable";

pub fn client_for(server: &MockServer) -> HyperswitchClient {
    HyperswitchClient::builder(SECRET_KEY, PUBLISHABLE_KEY)
        .with_base_url(server.uri())
        .build()
        .unwrap()
}

pub fn client_with_profile(server: &MockServer, profile_id: &str) -> HyperswitchClient {
    HyperswitchClient::builder(SECRET_KEY, PUBLISHABLE_KEY)
        .with_base_url(server.uri())
        .with_default_profile_id(profile_id)
        .build()
        .unwrap()
}
