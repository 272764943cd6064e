use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Destination is empty")]
    Empty,

    #[error("Fragment destination has no element id")]
    EmptyFragment,

    #[error("Destination {0:?} is not a fragment, path or absolute URL")]
    Malformed(String),

    #[error("Destination scheme {0:?} is not allowed")]
    UnsafeScheme(String),

    #[error("No element with id {0:?} in the current document")]
    ElementNotFound(String),

    #[error("Browser API unavailable: {0}")]
    Unavailable(&'static str),

    #[error("Browser navigation failed: {0}")]
    Browser(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("Please enter your email address")]
    Empty,

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
