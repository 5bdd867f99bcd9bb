use std::fmt::Debug;

use serde_json::Value;

use crate::api::error::Result;

mod endpoint;
mod multipart;

pub use endpoint::Endpoint;
pub use multipart::MultipartFormData;

/// Base contract of the generated model family. Every model implements the
/// same five operations, so the surrounding client machinery can handle any
/// of them uniformly.
pub trait Model: Debug + Default {
    /// Checks structural well-formedness of the model.
    fn validate(&self) -> Result<()>;

    /// JSON object holding exactly the set fields under their wire names.
    /// Unset fields are omitted, never emitted as null.
    fn to_json(&self) -> Value;

    /// Reads the wire-named fields out of `json`. Absent keys leave the
    /// matching field unset; a present key of the wrong type is an error.
    fn from_json(json: &Value) -> Result<Self>;

    /// Adds one UTF-8 string part per set field, named
    /// `<name_prefix><wire name>`.
    fn to_multipart(&self, multipart: &mut MultipartFormData, name_prefix: &str);

    /// Inverse of [`Model::to_multipart`]; absent parts leave fields unset.
    fn from_multipart(multipart: &MultipartFormData, name_prefix: &str) -> Result<Self>;
}
