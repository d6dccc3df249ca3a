//! Option-params merging.

use serde_json::{Map, Value};

/// Shallow-merge caller option params into an adapter's base request object.
///
/// Last writer wins: caller keys overwrite same-named base fields, unknown
/// keys pass through to the vendor untouched. Non-object bases are returned
/// unchanged.
pub(crate) fn merge_option_params(base: Value, option_params: &Map<String, Value>) -> Value {
    match base {
        Value::Object(mut fields) => {
            for (key, value) in option_params {
                fields.insert(key.clone(), value.clone());
            }
            Value::Object(fields)
        }
        other => other,
    }
}
