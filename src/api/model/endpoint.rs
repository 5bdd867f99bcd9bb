use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::constants::{WIRE_NAME_ENDPOINT, WIRE_NAME_INSTANCE_ID};
use crate::api::error::Error::FieldTypeMismatch;
use crate::api::error::Result;
use crate::api::model::{Model, MultipartFormData};

/// One registry endpoint record exchanged with the registration server.
/// Both attributes are optional and independently presence-tracked; an
/// unset attribute never reaches the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// identifies the service instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// network address of the instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Endpoint {
    pub fn instance_id(&self) -> Option<&String> {
        self.instance_id.as_ref()
    }

    pub fn instance_id_is_set(&self) -> bool {
        self.instance_id.is_some()
    }

    pub fn set_instance_id(&mut self, value: impl Into<String>) {
        self.instance_id = Some(value.into());
    }

    pub fn unset_instance_id(&mut self) {
        self.instance_id = None;
    }

    pub fn endpoint(&self) -> Option<&String> {
        self.endpoint.as_ref()
    }

    pub fn endpoint_is_set(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn set_endpoint(&mut self, value: impl Into<String>) {
        self.endpoint = Some(value.into());
    }

    pub fn unset_endpoint(&mut self) {
        self.endpoint = None;
    }

    pub fn is_same_endpoint(&self, other: &Endpoint) -> bool {
        self.instance_id == other.instance_id && self.endpoint == other.endpoint
    }
}

fn string_field(json: &Value, wire_name: &'static str) -> Result<Option<String>> {
    match json.get(wire_name) {
        None => Ok(None),
        Some(value) => match value.as_str() {
            Some(value) => Ok(Some(value.to_owned())),
            None => Err(FieldTypeMismatch(wire_name, "string")),
        },
    }
}

impl Model for Endpoint {
    // No field of Endpoint is marked required by the server contract.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        if let Some(instance_id) = &self.instance_id {
            object.insert(
                WIRE_NAME_INSTANCE_ID.to_owned(),
                Value::String(instance_id.to_owned()),
            );
        }
        if let Some(endpoint) = &self.endpoint {
            object.insert(
                WIRE_NAME_ENDPOINT.to_owned(),
                Value::String(endpoint.to_owned()),
            );
        }
        Value::Object(object)
    }

    fn from_json(json: &Value) -> Result<Self> {
        Ok(Endpoint {
            instance_id: string_field(json, WIRE_NAME_INSTANCE_ID)?,
            endpoint: string_field(json, WIRE_NAME_ENDPOINT)?,
        })
    }

    fn to_multipart(&self, multipart: &mut MultipartFormData, name_prefix: &str) {
        if let Some(instance_id) = &self.instance_id {
            multipart.add_part(
                format!("{name_prefix}{WIRE_NAME_INSTANCE_ID}"),
                instance_id.as_str(),
            );
        }
        if let Some(endpoint) = &self.endpoint {
            multipart.add_part(
                format!("{name_prefix}{WIRE_NAME_ENDPOINT}"),
                endpoint.as_str(),
            );
        }
    }

    fn from_multipart(multipart: &MultipartFormData, name_prefix: &str) -> Result<Self> {
        let instance_id = multipart
            .part(&format!("{name_prefix}{WIRE_NAME_INSTANCE_ID}"))
            .map(str::to_owned);
        let endpoint = multipart
            .part(&format!("{name_prefix}{WIRE_NAME_ENDPOINT}"))
            .map(str::to_owned);
        Ok(Endpoint {
            instance_id,
            endpoint,
        })
    }
}
