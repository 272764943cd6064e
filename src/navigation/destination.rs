use crate::common::NavigationError;

/// Schemes that execute content instead of navigating to it.
const UNSAFE_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// Schemes that can be opened in a new browsing context.
const WEB_SCHEMES: &[&str] = &["http", "https"];

/// A classified navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Percent-decoded element id on the current page, without the leading `#`.
    Fragment(String),
    /// Root-relative application path, including any query or fragment.
    Path(String),
    /// Absolute or protocol-relative URL.
    External(String),
}

impl Destination {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fragment(id) => id,
            Self::Path(path) => path,
            Self::External(url) => url,
        }
    }

    /// Whether the destination may be opened in a new tab or window.
    pub fn supports_new_context(&self) -> bool {
        match self {
            Self::External(url) => {
                url.starts_with("//")
                    || scheme_of(url).is_some_and(|scheme| {
                        WEB_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s))
                    })
            }
            _ => false,
        }
    }
}

impl std::str::FromStr for Destination {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fragment(id) => write!(f, "#{id}"),
            Self::Path(path) => write!(f, "{path}"),
            Self::External(url) => write!(f, "{url}"),
        }
    }
}

/// Classifies a destination string by its leading characters.
///
/// Order: empty, control characters, `#fragment`, `//protocol-relative`,
/// `/path`, `scheme:`. Everything else is malformed. Protocol-relative and
/// `http`/`https` URLs need a host after the `//`.
pub fn classify(raw: &str) -> Result<Destination, NavigationError> {
    let dest = raw.trim();
    if dest.is_empty() {
        return Err(NavigationError::Empty);
    }
    if dest.chars().any(|c| c.is_ascii_control()) {
        return Err(NavigationError::Malformed(dest.to_string()));
    }

    if let Some(id) = dest.strip_prefix('#') {
        let id = urlencoding::decode(id)
            .map_err(|_| NavigationError::Malformed(dest.to_string()))?;
        if id.is_empty() {
            return Err(NavigationError::EmptyFragment);
        }
        return Ok(Destination::Fragment(id.into_owned()));
    }

    if let Some(rest) = dest.strip_prefix("//") {
        return if has_host(rest) {
            Ok(Destination::External(dest.to_string()))
        } else {
            Err(NavigationError::Malformed(dest.to_string()))
        };
    }

    if dest.starts_with('/') {
        return Ok(Destination::Path(dest.to_string()));
    }

    match scheme_of(dest) {
        Some(scheme) if UNSAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) => {
            Err(NavigationError::UnsafeScheme(scheme.to_ascii_lowercase()))
        }
        Some(scheme) if WEB_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) => {
            let rest = &dest[scheme.len() + 1..];
            match rest.strip_prefix("//") {
                Some(authority) if has_host(authority) => {
                    Ok(Destination::External(dest.to_string()))
                }
                _ => Err(NavigationError::Malformed(dest.to_string())),
            }
        }
        Some(_) => Ok(Destination::External(dest.to_string())),
        None => Err(NavigationError::Malformed(dest.to_string())),
    }
}

/// Whether the text after `//` starts with a non-empty host.
fn has_host(authority: &str) -> bool {
    let end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
    let host = &authority[..end];
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    !host.is_empty() && !host.starts_with(':')
}

/// Returns the URI scheme if `s` starts with
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn scheme_of(s: &str) -> Option<&str> {
    let (scheme, _) = s.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(scheme)
}
