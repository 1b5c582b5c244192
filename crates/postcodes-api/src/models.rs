// Wire types for the postcodes.io API
//
// Every endpoint wraps its payload in the `{ "status": <int>, "result": T }`
// envelope modelled by `Response<T>`. Fields on the postcode record use
// `#[serde(default)]` liberally because the upstream nulls out attributes
// that do not apply (e.g. grid references for the Channel Islands).

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard postcodes.io response envelope.
///
/// ```json
/// { "status": 200, "result": { ... } }
/// ```
///
/// `status` mirrors the HTTP status and is authoritative: error responses
/// carry a well-formed envelope too (`{"status": 404, "error": "..."}`),
/// in which case `data` is `None`. Callers distinguish success from
/// failure by inspecting `status`, not by catching an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub status: u16,
    #[serde(rename = "result", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Response<T> {
    /// Envelope with no payload, carrying only a status code. The decode
    /// path for blank bodies and the transport-failure surface.
    pub fn empty(status: u16) -> Self {
        Self { status, data: None }
    }

    /// `true` when `status` is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One element of a bulk response: a submitted query item alongside its
/// matches, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiResponse<Q, R> {
    pub query: Q,
    /// The upstream sends `"result": null` for a query with no matches.
    #[serde(
        rename = "result",
        default = "Vec::new",
        deserialize_with = "null_as_empty",
        bound(deserialize = "Q: Deserialize<'de>, R: Deserialize<'de>")
    )]
    pub results: Vec<R>,
}

fn null_as_empty<'de, D, R>(deserializer: D) -> Result<Vec<R>, D::Error>
where
    D: serde::Deserializer<'de>,
    R: Deserialize<'de>,
{
    Ok(Option::<Vec<R>>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Geolocation query ────────────────────────────────────────────────

/// One unit of a bulk reverse-geocode batch.
///
/// Optional fields are omitted from the POST body when unset so the
/// upstream defaults (limit 10, radius 100m, wide search off) apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(
        rename = "wideSearch",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wide_search: Option<bool>,
}

impl Geolocation {
    /// A bare coordinate query with all upstream defaults.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            radius: None,
            limit: None,
            wide_search: None,
        }
    }
}

// ── Postcode record ──────────────────────────────────────────────────

/// Full postcode record as returned by lookup, query, and reverse-geocode
/// operations.
///
/// Administrative and geographic attributes straight off the wire; the
/// client never interprets them. Anything the upstream adds that is not
/// modelled explicitly lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Postcode {
    /// Full postcode: outward code, single space, inward code.
    pub postcode: String,
    /// Positional quality of the assigned grid reference (1-9).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,
    /// OS grid reference Easting; absent for the Channel Islands and the
    /// Isle of Man.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eastings: Option<i64>,
    /// OS grid reference Northing; absent as for `eastings`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub northings: Option<i64>,
    /// Constituent country of the UK (or Channel Islands / Isle of Man).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Strategic Health Authority for the postcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nhs_ha: Option<String>,
    /// WGS84 longitude derived from the national grid reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// WGS84 latitude derived from the national grid reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Westminster Parliamentary Constituency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parliamentary_constituency: Option<String>,
    /// European Electoral Region (EER).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub european_electoral_region: Option<String>,
    /// Primary Care Trust (or the devolved equivalent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_care_trust: Option<String>,
    /// Region (formerly Government Office Region).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// 2011 Census lower layer super output area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsoa: Option<String>,
    /// 2011 Census middle layer super output area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msoa: Option<String>,
    /// Inward code: the part after the space, used for final delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incode: Option<String>,
    /// Outward code: the postal district, e.g. `SW1A`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcode: Option<String>,
    /// Current district / unitary authority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_district: Option<String>,
    /// Civil parish (England) / community (Wales).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parish: Option<String>,
    /// Current county.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_county: Option<String>,
    /// Current administrative/electoral ward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_ward: Option<String>,
    /// Clinical Commissioning Group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccg: Option<String>,
    /// NUTS / Local Administrative Units classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuts: Option<String>,
    /// ONS/GSS codes for the areas above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codes: Option<PostcodeCodes>,
    /// Catch-all for fields the upstream adds over time.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// ONS ("GSS") codes for the administrative areas a postcode belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostcodeCodes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_ward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuts: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_single_record_envelope() {
        let body = json!({
            "status": 200,
            "result": {
                "postcode": "SW1A 2AA",
                "quality": 1,
                "eastings": 530047,
                "northings": 179951,
                "country": "England",
                "longitude": -0.127695,
                "latitude": 51.503396,
                "region": "London",
                "incode": "2AA",
                "outcode": "SW1A",
                "codes": { "admin_district": "E09000033" }
            }
        });

        let resp: Response<Postcode> = serde_json::from_value(body).expect("valid envelope");
        assert_eq!(resp.status, 200);
        assert!(resp.is_success());

        let record = resp.data.expect("populated result");
        assert_eq!(record.postcode, "SW1A 2AA");
        assert_eq!(record.quality, Some(1));
        assert_eq!(record.longitude, Some(-0.127695));
        assert_eq!(record.outcode.as_deref(), Some("SW1A"));
        assert_eq!(
            record.codes.expect("codes").admin_district.as_deref(),
            Some("E09000033")
        );
    }

    #[test]
    fn decode_list_envelope() {
        let body = json!({
            "status": 200,
            "result": [
                { "postcode": "SW1A 2AA" },
                { "postcode": "SW1A 2AB" },
            ]
        });

        let resp: Response<Vec<Postcode>> = serde_json::from_value(body).expect("valid envelope");
        let records = resp.data.expect("populated result");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].postcode, "SW1A 2AA");
        assert_eq!(records[1].postcode, "SW1A 2AB");
    }

    #[test]
    fn decode_query_result_pairs_in_submission_order() {
        let body = json!({
            "status": 200,
            "result": [
                { "query": "AB1 2CD", "result": [{ "postcode": "AB1 2CD" }] },
                { "query": "ZZ9 9ZZ", "result": null },
                { "query": "XX0 0XX" },
            ]
        });

        let resp: Response<Vec<MultiResponse<String, Postcode>>> =
            serde_json::from_value(body).expect("valid envelope");
        let pairs = resp.data.expect("populated result");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].query, "AB1 2CD");
        assert_eq!(pairs[0].results.len(), 1);
        assert_eq!(pairs[1].query, "ZZ9 9ZZ");
        assert!(pairs[1].results.is_empty());
        assert!(pairs[2].results.is_empty());
    }

    // `Postcode` has no `Default` impl: decoding the generic envelopes for
    // it must not demand one, and a missing `result` key is still `None`.
    #[test]
    fn missing_result_key_decodes_to_none() {
        let resp: Response<Postcode> =
            serde_json::from_value(json!({ "status": 500 })).expect("valid envelope");
        assert_eq!(resp.status, 500);
        assert!(resp.data.is_none());

        let bulk: Response<Vec<MultiResponse<String, Postcode>>> =
            serde_json::from_value(json!({ "status": 500 })).expect("valid envelope");
        assert!(bulk.data.is_none());
    }

    #[test]
    fn decode_boolean_and_string_list_results() {
        let valid: Response<bool> =
            serde_json::from_value(json!({ "status": 200, "result": true })).expect("bool result");
        assert_eq!(valid.data, Some(true));

        let completions: Response<Vec<String>> =
            serde_json::from_value(json!({ "status": 200, "result": ["SW1A 2AA", "SW1A 2AB"] }))
                .expect("string list result");
        assert_eq!(completions.data.expect("populated").len(), 2);
    }

    #[test]
    fn error_envelope_has_no_data() {
        let body = json!({ "status": 404, "error": "Postcode not found" });
        let resp: Response<Postcode> = serde_json::from_value(body).expect("valid envelope");
        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        assert!(resp.data.is_none());
    }

    #[test]
    fn reencoding_preserves_result_values() {
        let original = json!({
            "status": 200,
            "result": { "postcode": "M1 1AE", "quality": 4, "region": "North West" }
        });

        let decoded: Response<Postcode> =
            serde_json::from_value(original.clone()).expect("valid envelope");
        let reencoded = serde_json::to_value(&decoded).expect("serializable");
        assert_eq!(reencoded, original);
    }

    #[test]
    fn unknown_fields_land_in_extra() {
        let body = json!({
            "status": 200,
            "result": { "postcode": "M1 1AE", "ced": "E99999999", "date_of_introduction": "198001" }
        });

        let resp: Response<Postcode> = serde_json::from_value(body).expect("valid envelope");
        let record = resp.data.expect("populated result");
        assert_eq!(record.extra["ced"], json!("E99999999"));
        assert_eq!(record.extra["date_of_introduction"], json!("198001"));
    }
}
