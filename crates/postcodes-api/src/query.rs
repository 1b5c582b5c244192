// Optional query parameter rendering
//
// Operations take their optional parameters (limit, radius, wideSearch,
// outcode) as `Option`s; absent parameters are omitted from the path
// entirely so the upstream defaults apply. No client-side range checks --
// "limit < 100" and "radius < 2000m" are upstream contracts, and the
// upstream error is the answer when they are violated.

use std::fmt::Display;

/// An ordered set of optional query parameters for a single request.
///
/// Parameters render in insertion order: `?` before the first one unless
/// the path already embeds a literal `?`, `&` before each subsequent one.
#[derive(Debug, Default)]
pub(crate) struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter when the caller supplied a value.
    pub(crate) fn push_opt<V: Display>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    /// Render `path` with the collected parameters appended.
    pub(crate) fn append_to(&self, path: &str) -> String {
        let mut out = path.to_owned();
        let mut sep = if path.contains('?') { '&' } else { '?' };
        for (name, value) in &self.pairs {
            out.push(sep);
            out.push_str(name);
            out.push('=');
            out.push_str(value);
            sep = '&';
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_leaves_path_untouched() {
        let path = QueryParams::new().append_to("https://x/postcodes/N1/nearest");
        assert_eq!(path, "https://x/postcodes/N1/nearest");
    }

    #[test]
    fn first_param_uses_question_mark() {
        let path = QueryParams::new()
            .push_opt("limit", Some(5))
            .append_to("https://x/postcodes/N1/nearest");
        assert_eq!(path, "https://x/postcodes/N1/nearest?limit=5");
    }

    #[test]
    fn subsequent_params_use_ampersand() {
        let path = QueryParams::new()
            .push_opt("limit", Some(5))
            .push_opt("radius", Some(200))
            .push_opt("wideSearch", Some(true))
            .append_to("https://x/postcodes/N1/nearest");
        assert_eq!(
            path,
            "https://x/postcodes/N1/nearest?limit=5&radius=200&wideSearch=true"
        );
    }

    #[test]
    fn embedded_question_mark_switches_to_ampersand() {
        let path = QueryParams::new()
            .push_opt("limit", Some(5))
            .append_to("https://x/postcodes?lon=-0.1&lat=51.5");
        assert_eq!(path, "https://x/postcodes?lon=-0.1&lat=51.5&limit=5");
    }

    #[test]
    fn absent_params_are_omitted_not_defaulted() {
        let path = QueryParams::new()
            .push_opt("limit", None::<u32>)
            .push_opt("radius", Some(100))
            .push_opt("wideSearch", None::<bool>)
            .append_to("https://x/postcodes/N1/nearest");
        assert_eq!(path, "https://x/postcodes/N1/nearest?radius=100");
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            QueryParams::new()
                .push_opt("limit", Some(10))
                .push_opt("radius", Some(500))
                .append_to("https://x/postcodes/N1/nearest")
        };
        assert_eq!(build(), build());
    }
}
