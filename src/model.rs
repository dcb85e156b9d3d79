//! Shipment records consumed by the GR layout engine.
//!
//! Records arrive as JSON from the logistics API. Every field is optional and
//! numbers are accepted wherever a string is expected, since the API is not
//! consistent about either. Unknown fields are ignored.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// A transport request as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportRequest {
    #[serde(deserialize_with = "loose_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub formatted_request_id: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub gr_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub consigner: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub consignee: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub pickup_location: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub delivery_location: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub commodity: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub factory_reporting_date: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub factory_release_date: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub gstin: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub reference_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub booking_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub job_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub cargo_weight: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub vehicle_size: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub container_size: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub port: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub vehicle_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub driver_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub driver_contact: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub container_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub shipping_line: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub seal_number: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub transporter_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub no_of_containers: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub remarks: Option<String>,
}

/// Vehicle and crew assigned by a transporter, with the containers it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransporterDetail {
    #[serde(deserialize_with = "loose_string")]
    pub transporter_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub vehicle_no: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub driver_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub driver_contact: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub containers: Vec<ContainerDetail>,
    /// Flat container fields, used when `containers` is empty.
    #[serde(deserialize_with = "loose_string")]
    pub container_no: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub line: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub seal_no: Option<String>,
}

/// A single container on a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerDetail {
    #[serde(deserialize_with = "loose_string")]
    pub container_no: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub line: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub seal_no: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub size: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub weight: Option<String>,
}

/// A request together with its transporter details, as exported for printing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrJob {
    pub request: TransportRequest,
    #[serde(deserialize_with = "null_as_empty")]
    pub transporter_details: Vec<TransporterDetail>,
}

impl GrJob {
    /// Parse a job from JSON.
    ///
    /// Accepts either the `{ "request": ..., "transporter_details": [...] }`
    /// envelope or a bare request object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let is_envelope = value
            .as_object()
            .map(|obj| obj.contains_key("request") || obj.contains_key("transporter_details"))
            .unwrap_or(false);

        if is_envelope {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(Self {
                request: serde_json::from_value(value)?,
                transporter_details: Vec::new(),
            })
        }
    }

    /// Read and parse a job file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Transporter details, or `None` when the list is empty.
    pub fn details(&self) -> Option<&[TransporterDetail]> {
        if self.transporter_details.is_empty() {
            None
        } else {
            Some(&self.transporter_details)
        }
    }
}

/// Accept strings, numbers, booleans and null for an optional text field.
fn loose_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
