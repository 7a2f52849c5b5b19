use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Trace,
    Connect,
    /// Any token outside the standard set, kept verbatim.
    Custom(Box<str>),
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodMask: u16 {
        const GET = 1 << 0;
        const HEAD = 1 << 1;
        const POST = 1 << 2;
        const PUT = 1 << 3;
        const DELETE = 1 << 4;
        const PATCH = 1 << 5;
        const OPTIONS = 1 << 6;
        const TRACE = 1 << 7;
        const CONNECT = 1 << 8;
        const CUSTOM = 1 << 15;
    }
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Custom(token) => token.as_ref(),
        }
    }

    /// Bit for this method. Every custom token shares `CUSTOM`.
    #[inline]
    pub fn mask(&self) -> MethodMask {
        match self {
            HttpMethod::Get => MethodMask::GET,
            HttpMethod::Head => MethodMask::HEAD,
            HttpMethod::Post => MethodMask::POST,
            HttpMethod::Put => MethodMask::PUT,
            HttpMethod::Delete => MethodMask::DELETE,
            HttpMethod::Patch => MethodMask::PATCH,
            HttpMethod::Options => MethodMask::OPTIONS,
            HttpMethod::Trace => MethodMask::TRACE,
            HttpMethod::Connect => MethodMask::CONNECT,
            HttpMethod::Custom(_) => MethodMask::CUSTOM,
        }
    }
}

impl From<&str> for HttpMethod {
    fn from(token: &str) -> Self {
        match token {
            "GET" => HttpMethod::Get,
            "HEAD" => HttpMethod::Head,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            "TRACE" => HttpMethod::Trace,
            "CONNECT" => HttpMethod::Connect,
            other => HttpMethod::Custom(other.into()),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(token: String) -> Self {
        HttpMethod::from(token.as_str())
    }
}

impl From<&HttpMethod> for HttpMethod {
    fn from(method: &HttpMethod) -> Self {
        method.clone()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tokens_map_to_variants() {
        assert_eq!(HttpMethod::from("GET"), HttpMethod::Get);
        assert_eq!(HttpMethod::from("OPTIONS"), HttpMethod::Options);
        assert_eq!(HttpMethod::from("DELETE").as_str(), "DELETE");
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let method = HttpMethod::from("get");
        assert_eq!(method, HttpMethod::Custom("get".into()));
        assert_eq!(method.mask(), MethodMask::CUSTOM);
    }

    #[test]
    fn custom_tokens_round_trip_through_display() {
        let method = HttpMethod::from("PURGE".to_string());
        assert_eq!(method.to_string(), "PURGE");
    }
}
