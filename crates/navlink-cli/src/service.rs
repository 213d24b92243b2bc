use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

pub const SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Serialize)]
struct ServiceErrorEnvelope {
    code: &'static str,
    message: String,
    details: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ServiceEnvelope {
    schema_version: &'static str,
    command: &'static str,
    ok: bool,
    result: Option<Value>,
    error: Option<ServiceErrorEnvelope>,
}

pub fn success_envelope<T: Serialize>(
    command: &'static str,
    result: &T,
) -> Result<String, AppError> {
    let result = serde_json::to_value(result)
        .map_err(|err| AppError::runtime(format!("failed to serialize result: {err}")))?;

    serde_json::to_string(&ServiceEnvelope {
        schema_version: SCHEMA_VERSION,
        command,
        ok: true,
        result: Some(result),
        error: None,
    })
    .map_err(|err| AppError::runtime(format!("failed to serialize service envelope: {err}")))
}

pub fn error_envelope(command: &'static str, error: &AppError) -> String {
    let envelope = ServiceEnvelope {
        schema_version: SCHEMA_VERSION,
        command,
        ok: false,
        result: None,
        error: Some(ServiceErrorEnvelope {
            code: error.code(),
            message: error.message.clone(),
            details: Some(serde_json::json!({
                "exit_code": error.exit_code(),
            })),
        }),
    };

    serde_json::to_string(&envelope).unwrap_or_else(|serialize_error| {
        serde_json::json!({
            "schema_version": SCHEMA_VERSION,
            "command": command,
            "ok": false,
            "result": Value::Null,
            "error": {
                "code": "internal.serialize",
                "message": format!("failed to serialize service error envelope: {serialize_error}"),
                "details": Value::Null,
            }
        })
        .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_wraps_result() {
        let output = success_envelope("route", &serde_json::json!({"items": []}))
            .expect("envelope should serialize");
        let json: Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(json["schema_version"], "v1");
        assert_eq!(json["command"], "route");
        assert_eq!(json["ok"], true);
        assert!(json["result"]["items"].is_array());
        assert!(json["error"].is_null());
    }

    #[test]
    fn error_envelope_carries_code_and_exit_code() {
        let output = error_envelope("route", &AppError::user("unknown app: mapquest"));
        let json: Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(json["ok"], false);
        assert!(json["result"].is_null());
        assert_eq!(json["error"]["code"], "navlink.user");
        assert_eq!(json["error"]["message"], "unknown app: mapquest");
        assert_eq!(json["error"]["details"]["exit_code"], 2);
    }
}
