/// Local storage key holding the serialized current user
pub const STORAGE_KEY_USER: &str = "scoda_user";

/// Local storage key holding the raw bearer token
pub const STORAGE_KEY_TOKEN: &str = "scoda_token";

/// Blanket timeout applied to every backend request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default backend base URL (local development)
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Credits consumed by one generation request
pub const CREDITS_PER_GENERATION: u32 = 1;

/// Credits granted to a freshly created account
pub const STARTING_CREDITS: u32 = 10;

/// Topics offered on the generator page when the input is empty
pub const SUGGESTED_TOPICS: [&str; 3] = [
    "7-day Instagram Reels challenge for fitness coaches",
    "House hunting tips for buyers in Abuja",
    "Launching a new collection for a fashion brand",
];
