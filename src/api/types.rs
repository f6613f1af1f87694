//! Request and response payloads for the photoshoot API

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Location referenced by every shoot the harness creates
pub const LOCATION_ID: i64 = 1;

/// Location name sent on create
pub const CREATED_LOCATION_NAME: &str = "Redmond";

/// Location name sent on update
pub const UPDATED_LOCATION_NAME: &str = "UpdatedLocation";

/// Server-assigned shoot identifier
///
/// Defaults to 0, the value downstream steps receive when create fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShootId(pub i64);

impl fmt::Display for ShootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a photo owned by the server, never created here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootRecord {
    #[serde(serialize_with = "serialize_millis")]
    pub date: DateTime<Utc>,
    pub location: Location,
}

impl ShootRecord {
    /// A record dated now at the fixed location with the given name
    pub fn now(location_name: &str) -> Self {
        Self {
            date: Utc::now(),
            location: Location {
                location_id: LOCATION_ID,
                location_name: location_name.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "locationID")]
    pub location_id: i64,
    #[serde(rename = "locationName")]
    pub location_name: String,
}

/// Typed body of a successful create response
///
/// Only the identifier is read; anything else the server echoes is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedShoot {
    #[serde(rename = "photoshootID")]
    pub photoshoot_id: ShootId,
}

/// `yyyy-MM-ddTHH:mm:ss.fffZ`
fn serialize_millis<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
