// Postcodes.io HTTP client
//
// Wraps `reqwest::Client` with postcodes.io URL construction and envelope
// decoding. One public method per upstream operation; every method issues
// exactly one request and decodes exactly once -- no retries, no caching.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::bulk::{GeolocationBatch, encode_postcode_batch};
use crate::endpoints::Endpoints;
use crate::error::Error;
use crate::models::{Geolocation, MultiResponse, Postcode, Response};
use crate::query::QueryParams;

/// Async client for the postcodes.io API.
///
/// Stateless after construction: the only state is the configured root and
/// the paths derived from it, so one instance is safe to share across
/// tasks. Upstream failures that produce a well-formed envelope (404 for
/// an unknown postcode, 400 for a bad batch) come back as an ordinary
/// [`Response`] -- inspect the envelope's `status` rather than matching
/// on [`Error`].
#[derive(Debug)]
pub struct PostcodesClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl PostcodesClient {
    /// Client for the default public API root, `https://api.postcodes.io/`.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(),
        }
    }

    /// Client for a custom API root -- a self-hosted postcodes.io instance,
    /// or a replacement root should the default move.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `root` is blank;
    /// use [`PostcodesClient::new`] for the default root.
    pub fn with_root(root: &str) -> Result<Self, Error> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::with_root(root)?,
        })
    }

    /// Client with a pre-built `reqwest::Client`.
    ///
    /// Use this to supply your own transport settings (timeouts, proxy,
    /// TLS configuration).
    pub fn from_reqwest(root: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            endpoints: Endpoints::with_root(root)?,
        })
    }

    /// The configured API root.
    pub fn root(&self) -> &str {
        self.endpoints.root()
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Look up a postcode. Returns all available data if found; the
    /// envelope carries status 404 if the postcode does not exist.
    ///
    /// `GET /postcodes/{postcode}`
    pub async fn lookup_postcode(&self, postcode: &str) -> Result<Response<Postcode>, Error> {
        self.get(&self.endpoints.lookup(postcode)).await
    }

    /// Look up a batch of postcodes in one round trip. Results pair each
    /// submitted code with its matches, in submission order.
    ///
    /// `POST /postcodes/` -- accepts up to 100 codes; the limit is an
    /// upstream contract and is not enforced client-side.
    pub async fn bulk_postcode_lookup<S: AsRef<str>>(
        &self,
        postcodes: &[S],
    ) -> Result<Response<Vec<MultiResponse<String, Postcode>>>, Error> {
        let body = encode_postcode_batch(postcodes);
        self.post_raw(&self.endpoints.bulk_lookup(), body).await
    }

    /// Reverse-geocode a batch of coordinates in one round trip. Results
    /// pair each submitted geolocation with its matches, in submission
    /// order.
    ///
    /// `POST /postcodes/` -- accepts up to 100 geolocations; the limit is
    /// an upstream contract and is not enforced client-side.
    pub async fn bulk_reverse_geocoding(
        &self,
        geolocations: Vec<Geolocation>,
    ) -> Result<Response<Vec<MultiResponse<Geolocation, Postcode>>>, Error> {
        let batch = GeolocationBatch::from(geolocations);
        self.post_json(&self.endpoints.bulk_reverse_geocode(), &batch)
            .await
    }

    /// Nearest postcodes for a coordinate. Unsupplied parameters fall back
    /// to the upstream defaults (limit 10, radius 100m, wide search off).
    /// With wide search enabled the upstream searches up to a 20km radius
    /// but caps results at 10, ignoring larger limits and radii.
    ///
    /// `GET /postcodes?lon={lon}&lat={lat}[&limit=..][&radius=..][&wideSearch=..]`
    pub async fn nearest_postcodes(
        &self,
        longitude: f64,
        latitude: f64,
        limit: Option<u32>,
        radius: Option<u32>,
        wide_search: Option<bool>,
    ) -> Result<Response<Vec<Postcode>>, Error> {
        let path = QueryParams::new()
            .push_opt("limit", limit)
            .push_opt("radius", radius)
            .push_opt("wideSearch", wide_search)
            .append_to(&self.endpoints.nearest(longitude, latitude));
        self.get(&path).await
    }

    /// Nearest postcodes for a postcode. Unsupplied parameters fall back
    /// to the upstream defaults (limit 10, radius 100m).
    ///
    /// `GET /postcodes/{postcode}/nearest[?limit=..][&radius=..]`
    pub async fn nearest_postcodes_for_postcode(
        &self,
        postcode: &str,
        limit: Option<u32>,
        radius: Option<u32>,
    ) -> Result<Response<Vec<Postcode>>, Error> {
        let path = QueryParams::new()
            .push_opt("limit", limit)
            .push_opt("radius", radius)
            .append_to(&self.endpoints.nearest_for_postcode(postcode));
        self.get(&path).await
    }

    /// One random postcode, optionally filtered by outcode. An invalid
    /// outcode yields an envelope with no result.
    ///
    /// `GET /random/postcodes[?outcode=..]`
    pub async fn random_postcode(
        &self,
        outcode: Option<&str>,
    ) -> Result<Response<Postcode>, Error> {
        let path = QueryParams::new()
            .push_opt("outcode", outcode)
            .append_to(&self.endpoints.random());
        self.get(&path).await
    }

    /// Whether a postcode is a valid, live UK postcode.
    ///
    /// `GET /postcodes/{postcode}/validate`
    pub async fn validate_postcode(&self, postcode: &str) -> Result<Response<bool>, Error> {
        self.get(&self.endpoints.validate(postcode)).await
    }

    /// Complete a partial postcode. The result is a list of matching
    /// postcode strings, upstream default limit 10.
    ///
    /// `GET /postcodes/{partial}/autocomplete[?limit=..]`
    pub async fn autocomplete_postcode(
        &self,
        partial: &str,
        limit: Option<u32>,
    ) -> Result<Response<Vec<String>>, Error> {
        let path = QueryParams::new()
            .push_opt("limit", limit)
            .append_to(&self.endpoints.autocomplete(partial));
        self.get(&path).await
    }

    /// Free-text postcode search, returning full records for every match.
    /// Upstream default limit 10.
    ///
    /// `GET /postcodes?q={text}[&limit=..]`
    pub async fn query_postcodes(
        &self,
        text: &str,
        limit: Option<u32>,
    ) -> Result<Response<Vec<Postcode>>, Error> {
        let path = QueryParams::new()
            .push_opt("limit", limit)
            .append_to(&self.endpoints.query(text));
        self.get(&path).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the envelope.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>, Error> {
        let url = Url::parse(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        read_envelope(resp).await
    }

    /// Send a POST request with a hand-assembled JSON body (postcode
    /// batches) and decode the envelope.
    async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        body: String,
    ) -> Result<Response<T>, Error> {
        let url = Url::parse(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        read_envelope(resp).await
    }

    /// Send a POST request with a serde-serialized body (geolocation
    /// batches) and decode the envelope.
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<Response<T>, Error> {
        let url = Url::parse(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        read_envelope(resp).await
    }
}

impl Default for PostcodesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the `{ status, result }` envelope from a response.
///
/// A blank body is a valid terminal case, not an error: the envelope is
/// synthesized from the transport status with no data. When a body is
/// present its own `status` field is authoritative and may differ from the
/// transport status. A present-but-malformed body is
/// [`Error::Deserialization`] -- there is no safe partial envelope to
/// substitute.
async fn read_envelope<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Response<T>, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(Error::Transport)?;

    if body.trim().is_empty() {
        return Ok(Response::empty(status.as_u16()));
    }

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}
