//! User-facing texts that are not tied to a single field

pub const LOGIN_SUCCESS: &str = "Login successful!";

pub const SIGNUP_SUCCESS: &str = "Account created successfully";

pub const TOGGLE_SHOW: &str = "Show";

pub const TOGGLE_HIDE: &str = "Hide";
