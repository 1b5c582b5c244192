// Endpoint registry
//
// Holds the configured API root and the path prefixes derived from it.
// Every request path the client builds starts here. Pure string
// concatenation -- no network access, no validation beyond blankness.

use crate::error::Error;

/// Default API root for the public postcodes.io service.
pub const DEFAULT_API_ROOT: &str = "https://api.postcodes.io/";

/// The fixed set of request paths derived from a configured API root.
///
/// Constructed once per client and immutable afterwards. Point it at a
/// self-hosted postcodes.io instance via [`Endpoints::with_root`].
#[derive(Debug, Clone)]
pub struct Endpoints {
    root: String,
    /// `{root}postcodes/` -- the collection prefix most operations hang off.
    postcodes: String,
}

impl Endpoints {
    /// Registry for the default public API root.
    pub fn new() -> Self {
        Self::derive(DEFAULT_API_ROOT.to_owned())
    }

    /// Registry for a custom API root.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `root` is blank or
    /// whitespace-only -- use [`Endpoints::new`] for the default root. A
    /// missing trailing `/` is appended.
    pub fn with_root(root: &str) -> Result<Self, Error> {
        if root.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "blank API root path; use the default constructor \
                          for the stock postcodes.io root"
                    .into(),
            });
        }
        let root = if root.ends_with('/') {
            root.to_owned()
        } else {
            format!("{root}/")
        };
        Ok(Self::derive(root))
    }

    fn derive(root: String) -> Self {
        let postcodes = format!("{root}postcodes/");
        Self { root, postcodes }
    }

    /// The configured root, always with a trailing `/`.
    pub fn root(&self) -> &str {
        &self.root
    }

    // ── Per-operation request paths ──────────────────────────────────

    /// `GET {root}postcodes/{postcode}`
    pub fn lookup(&self, postcode: &str) -> String {
        format!("{}{postcode}", self.postcodes)
    }

    /// `POST {root}postcodes/` -- bulk postcode lookup.
    pub fn bulk_lookup(&self) -> String {
        self.postcodes.clone()
    }

    /// `POST {root}postcodes/` -- bulk reverse geocoding.
    pub fn bulk_reverse_geocode(&self) -> String {
        self.postcodes.clone()
    }

    /// `GET {root}postcodes?lon={lon}&lat={lat}` -- note the embedded `?`;
    /// further parameters join with `&`.
    pub fn nearest(&self, longitude: f64, latitude: f64) -> String {
        format!("{}?lon={longitude}&lat={latitude}", self.postcodes)
    }

    /// `GET {root}postcodes/{postcode}/nearest`
    pub fn nearest_for_postcode(&self, postcode: &str) -> String {
        format!("{}{postcode}/nearest", self.postcodes)
    }

    /// `GET {root}random/postcodes`
    pub fn random(&self) -> String {
        format!("{}random/postcodes", self.root)
    }

    /// `GET {root}postcodes/{postcode}/validate`
    pub fn validate(&self, postcode: &str) -> String {
        format!("{}{postcode}/validate", self.postcodes)
    }

    /// `GET {root}postcodes/{postcode}/autocomplete`
    pub fn autocomplete(&self, partial: &str) -> String {
        format!("{}{partial}/autocomplete", self.postcodes)
    }

    /// `GET {root}postcodes?q={query}` -- note the embedded `?`.
    pub fn query(&self, query: &str) -> String {
        format!("{}?q={query}", self.postcodes)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new()
    }
}
