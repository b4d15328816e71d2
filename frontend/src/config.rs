pub struct Config {
    pub api_base_url: &'static str,
    /// Period of the list page's auto-generate toggle.
    pub auto_generate_interval_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            auto_generate_interval_ms: 3_000,
        }
    }
}

pub const CONFIG: Config = Config::new();
