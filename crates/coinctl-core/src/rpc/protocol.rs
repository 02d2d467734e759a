use rand::Rng;
use serde::Serialize;

use crate::error::{json_type_name, ProtocolError};

/// Outgoing JSON-RPC request. Built per call and dropped after sending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: String,
    pub params: Vec<serde_json::Value>,
}

/// Build a request with a fresh random correlation id.
///
/// `params` are sent verbatim and in order; `null` entries are kept because
/// the daemon treats a `null` label differently from an empty one.
pub fn build_request(method: &str, params: Vec<serde_json::Value>) -> RequestEnvelope {
    RequestEnvelope {
        jsonrpc: "2.0",
        id: correlation_id(),
        method: method.to_owned(),
        params,
    }
}

/// Pull `result` out of a decoded response document.
///
/// A present `result: null` is returned as `Value::Null`; only an absent
/// member is an error.
pub fn extract_result(document: serde_json::Value) -> Result<serde_json::Value, ProtocolError> {
    let serde_json::Value::Object(mut envelope) = document else {
        return Err(ProtocolError::NotAnObject);
    };

    if let Some(err) = envelope.remove("error").filter(|e| !e.is_null()) {
        return Err(parse_jsonrpc_error(err));
    }

    envelope.remove("result").ok_or(ProtocolError::MissingResult)
}

/// Parse a JSON-RPC error value into a structured `ProtocolError`.
///
/// The JSON-RPC convention is `{"code": <int>, "message": <string>}`.
/// Anything else is reported verbatim.
fn parse_jsonrpc_error(err: serde_json::Value) -> ProtocolError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => ProtocolError::Server {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => ProtocolError::NonStandardError(err.to_string()),
    }
}

/// Require `value` to be an array, reporting the actual shape otherwise.
pub(crate) fn expect_array(
    value: serde_json::Value,
) -> Result<Vec<serde_json::Value>, ProtocolError> {
    match value {
        serde_json::Value::Array(items) => Ok(items),
        other => Err(ProtocolError::UnexpectedShape {
            expected: "array",
            found: json_type_name(&other),
        }),
    }
}

/// Require `value` to be an object, reporting the actual shape otherwise.
pub(crate) fn expect_object(
    value: serde_json::Value,
) -> Result<serde_json::Map<String, serde_json::Value>, ProtocolError> {
    match value {
        serde_json::Value::Object(fields) => Ok(fields),
        other => Err(ProtocolError::UnexpectedShape {
            expected: "object",
            found: json_type_name(&other),
        }),
    }
}

fn correlation_id() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn build_request_serializes_wire_shape() {
        let req = build_request("getreceivedbyaddress", vec![json!("addr"), json!(1)]);
        let value = serde_json::to_value(&req).expect("serializable");

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "getreceivedbyaddress");
        assert_eq!(value["params"], json!(["addr", 1]));
        assert!(value["id"].is_string());
    }

    #[test]
    fn build_request_keeps_null_params() {
        let req = build_request("setlabel", vec![json!("addr"), serde_json::Value::Null]);
        let text = serde_json::to_string(&req).expect("serializable");
        assert!(text.contains(r#""params":["addr",null]"#), "{text}");
    }

    #[test]
    fn correlation_ids_are_fresh() {
        let a = build_request("getbalance", Vec::new());
        let b = build_request("getbalance", Vec::new());
        assert_eq!(a.id.len(), 32);
        assert!(a.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn extract_result_returns_value() {
        let result = extract_result(json!({"result": 1.23456, "error": null, "id": "x"}))
            .expect("result present");
        assert_eq!(result, json!(1.23456));
    }

    #[test]
    fn extract_result_keeps_explicit_null() {
        let result = extract_result(json!({"result": null, "error": null})).expect("present");
        assert!(result.is_null());
    }

    #[test]
    fn extract_result_missing_member() {
        let err = extract_result(json!({"id": "x"})).expect_err("no result");
        assert!(matches!(err, ProtocolError::MissingResult));
    }

    #[test]
    fn extract_result_rejects_non_object() {
        let err = extract_result(json!([1, 2])).expect_err("array envelope");
        assert!(matches!(err, ProtocolError::NotAnObject));
    }

    #[test]
    fn extract_result_surfaces_server_error() {
        let err = extract_result(json!({
            "result": null,
            "error": {"code": -5, "message": "Invalid address"}
        }))
        .expect_err("error present");
        assert!(matches!(
            err,
            ProtocolError::Server { code: -5, ref message } if message == "Invalid address"
        ));
    }

    #[test]
    fn extract_result_non_standard_error() {
        let err = extract_result(json!({"error": "boom"})).expect_err("error present");
        assert!(matches!(err, ProtocolError::NonStandardError(ref raw) if raw == "\"boom\""));
    }

    #[test]
    fn expect_array_reports_found_shape() {
        let err = expect_array(json!(3)).expect_err("scalar");
        assert!(matches!(
            err,
            ProtocolError::UnexpectedShape {
                expected: "array",
                found: "number"
            }
        ));
    }
}
