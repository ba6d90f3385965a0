//! Well-known environment variable and configuration names

/// Environment variables read by the settings engine.
pub mod envars {
    pub const GCM_DEBUG: &str = "GCM_DEBUG";
    pub const GIT_TERMINAL_PROMPT: &str = "GIT_TERMINAL_PROMPT";
    pub const GCM_TRACE: &str = "GCM_TRACE";
    pub const GCM_TRACE_SECRETS: &str = "GCM_TRACE_SECRETS";
    pub const GCM_PROVIDER: &str = "GCM_PROVIDER";
    pub const GCM_AUTHORITY: &str = "GCM_AUTHORITY";

    pub const CURL_HTTP_PROXY: &str = "HTTP_PROXY";
    pub const CURL_HTTPS_PROXY: &str = "HTTPS_PROXY";
    pub const CURL_ALL_PROXY: &str = "ALL_PROXY";

    // curl itself only honours the lower-case form of http_proxy.
    pub const CURL_HTTP_PROXY_LOWER: &str = "http_proxy";
    pub const CURL_HTTPS_PROXY_LOWER: &str = "https_proxy";
    pub const CURL_ALL_PROXY_LOWER: &str = "all_proxy";

    /// Deprecated; superseded by `http.proxy` and the curl variables.
    pub const GCM_HTTP_PROXY: &str = "GCM_HTTP_PROXY";
}

/// Git configuration sections and properties.
pub mod git_config {
    pub mod credential {
        pub const SECTION: &str = "credential";
        pub const PROVIDER: &str = "provider";
        pub const AUTHORITY: &str = "authority";
        pub const DEBUG: &str = "debug";
        pub const TRACE_SECRETS: &str = "traceSecrets";
        /// Deprecated; superseded by `http.proxy`.
        pub const HTTP_PROXY: &str = "httpProxy";
        /// Deprecated; superseded by `http.proxy`.
        pub const HTTPS_PROXY: &str = "httpsProxy";
    }

    pub mod http {
        pub const SECTION: &str = "http";
        pub const PROXY: &str = "proxy";
    }
}
