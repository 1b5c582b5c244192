// Bulk batch encoding
//
// The two bulk endpoints POST to the same path but expect different body
// shapes, so they get two deliberately separate encode paths. The postcode
// batch is assembled by hand to keep its wire format pinned down
// (`{"postcodes" : [...]}`, items quoted verbatim); the geolocation batch
// is a plain serde serialization of a wrapper object. Do not unify them.

use serde::Serialize;

use crate::models::Geolocation;

/// Documented upstream cap on items per bulk request. Not enforced here:
/// oversized batches come back as an upstream 400, same as any other
/// contract violation.
pub const MAX_BATCH_SIZE: usize = 100;

/// Encode a postcode batch as the bulk-lookup POST body.
///
/// Items are double-quoted and comma-separated, in the order given. No
/// escaping is applied beyond the quoting -- callers are responsible for
/// supplying plain postcode strings.
///
/// `[]` encodes to `{"postcodes" : []}`.
pub fn encode_postcode_batch<S: AsRef<str>>(postcodes: &[S]) -> String {
    let items = postcodes
        .iter()
        .map(|p| format!("\"{}\"", p.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{\"postcodes\" : [{items}]}}")
}

/// POST body wrapper for the bulk reverse-geocoding endpoint:
/// `{"geolocations": [...]}`.
#[derive(Debug, Serialize)]
pub struct GeolocationBatch {
    pub geolocations: Vec<Geolocation>,
}

impl From<Vec<Geolocation>> for GeolocationBatch {
    fn from(geolocations: Vec<Geolocation>) -> Self {
        Self { geolocations }
    }
}
