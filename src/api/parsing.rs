use serde_json::Value;

/// HTTP method of a proxy event, accepting both payload format versions.
#[must_use]
pub fn request_method(payload: &Value) -> &str {
    payload
        .get("requestContext")
        .and_then(|c| c.get("http"))
        .and_then(|h| h.get("method"))
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
        .unwrap_or("GET")
}

/// Request path of a proxy event (`rawPath` for v2, `path` for v1).
#[must_use]
pub fn request_path(payload: &Value) -> &str {
    payload
        .get("rawPath")
        .and_then(Value::as_str)
        .or_else(|| payload.get("path").and_then(Value::as_str))
        .unwrap_or("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v2_payload() {
        let payload = json!({
            "rawPath": "/api/messages",
            "requestContext": { "http": { "method": "GET" } }
        });
        assert_eq!(request_method(&payload), "GET");
        assert_eq!(request_path(&payload), "/api/messages");
    }

    #[test]
    fn test_v1_payload() {
        let payload = json!({ "path": "/", "httpMethod": "OPTIONS" });
        assert_eq!(request_method(&payload), "OPTIONS");
        assert_eq!(request_path(&payload), "/");
    }

    #[test]
    fn test_defaults() {
        let payload = json!({});
        assert_eq!(request_method(&payload), "GET");
        assert_eq!(request_path(&payload), "/");
    }
}
