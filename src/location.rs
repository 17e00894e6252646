//! Request location: path plus query parameters.
//!
//! The URL is the only state a page has. Pages read their position from one
//! parameter (`page` or `slide`) and emit links that rewrite that parameter
//! while leaving every other one untouched, the same way
//! `URLSearchParams::set` behaves in a browser.
//!
//! Query strings use `application/x-www-form-urlencoded` rules: `+` is a
//! space and `%XX` is a percent-escaped byte.

/// A parsed request target such as `/carousel?slide=3&theme=dark`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    /// Parse a request target. Fragments are dropped; an empty path becomes `/`.
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let path = if path.is_empty() { "/" } else { path };

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self {
            path: path.to_string(),
            params,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Copy of this location with `name` set to `value`.
    ///
    /// The first occurrence keeps its position, later duplicates are removed,
    /// and a missing parameter is appended.
    pub fn with_param(&self, name: &str, value: impl ToString) -> Location {
        let value = value.to_string();
        let mut params = Vec::with_capacity(self.params.len() + 1);
        let mut replaced = false;
        for (k, v) in &self.params {
            if k == name {
                if !replaced {
                    params.push((k.clone(), value.clone()));
                    replaced = true;
                }
            } else {
                params.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            params.push((name.to_string(), value));
        }
        Location {
            path: self.path.clone(),
            params,
        }
    }

    /// Encoded query string without the leading `?`.
    pub fn query(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Relative href that changes only the query, e.g. `?page=3`.
    pub fn href(&self) -> String {
        format!("?{}", self.query())
    }

    /// Relative href for this location with `name` set to `value`.
    pub fn href_with(&self, name: &str, value: impl ToString) -> String {
        self.with_param(name, value).href()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query())
        }
    }
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'*' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
