//! Local argument checks that run before a request is built.

use nestre_core::Schema;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::api::types::{ApiResult, ApiSdkError};

const PATH_SEGMENT_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Rejects blank identifiers and returns the value percent-encoded for use
/// as a single path segment.
pub(crate) fn path_id(context: &'static str, name: &str, value: &str) -> ApiResult<String> {
    let value = non_blank(context, name, value)?;
    Ok(utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string())
}

/// Rejects empty or whitespace-only strings.
pub(crate) fn non_blank<'a>(
    context: &'static str,
    name: &str,
    value: &'a str,
) -> ApiResult<&'a str> {
    if value.trim().is_empty() {
        debug!(context, parameter = name, "rejected blank argument");
        return Err(ApiSdkError::InvalidArgument {
            context,
            message: format!("Invalid {}: must be a non-empty string", name),
        });
    }

    Ok(value)
}

/// Rejects zero and negative values.
pub(crate) fn positive_integer(context: &'static str, name: &str, value: i64) -> ApiResult<u64> {
    if value <= 0 {
        debug!(context, parameter = name, value, "rejected non-positive argument");
        return Err(ApiSdkError::InvalidArgument {
            context,
            message: format!("Invalid {}: must be a positive integer", name),
        });
    }

    Ok(value as u64)
}

/// Validates a payload against `schema` and returns the JSON that will be
/// sent.
pub(crate) fn checked_payload<B: Serialize + ?Sized>(
    context: &'static str,
    schema: &Schema,
    payload: &B,
) -> ApiResult<Value> {
    schema.validate_payload(payload).map_err(|violation| {
        debug!(context, field = %violation.field, "payload failed schema validation");
        ApiSdkError::SchemaValidation { context, violation }
    })
}
