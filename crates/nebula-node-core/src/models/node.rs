use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/organizations/{org}/nodes/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCreateRequest {
    pub name: String,
    pub hostname: String,
}

impl NodeCreateRequest {
    pub fn new(name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
        }
    }
}

/// A node as provisioned by the server.
///
/// `config` is the Nebula configuration the server generated for the node.
/// It is kept as raw JSON so changes to its schema on the server side do
/// not break this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub name: String,
    pub hostname: String,
    /// Address assigned inside the overlay network
    #[serde(rename = "nebula_ip", default, deserialize_with = "null_as_empty")]
    pub network_address: String,
    /// Empty when the server could not issue a key (e.g. no CA yet); the
    /// node still exists remotely and is saved as-is.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_key: String,
    pub organization: String,
    #[serde(default)]
    pub config: serde_json::Value,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": "40217527-d795-4f8d-a8d0-6f938130d77b",
            "name": "edge-1",
            "hostname": "edge-1.acme.net",
            "nebula_ip": "10.0.0.1",
            "api_key": "test-api-key",
            "organization": "acme",
            "config": {
                "pki": {"ca": "-----BEGIN NEBULA CERTIFICATE-----"},
                "lighthouse": {"am_lighthouse": false, "hosts": ["192.168.100.1"]}
            }
        })
    }

    #[test]
    fn test_node_create_request_has_only_name_and_hostname() {
        let req = NodeCreateRequest::new("edge-1", "edge-1.acme.net");
        let json = serde_json::to_value(&req).expect("serialize request");
        assert_eq!(json, json!({"name": "edge-1", "hostname": "edge-1.acme.net"}));
    }

    #[test]
    fn test_node_record_parses_wire_names() {
        let node: NodeRecord = serde_json::from_value(sample_json()).expect("parse node");
        assert_eq!(node.id, "40217527-d795-4f8d-a8d0-6f938130d77b");
        assert_eq!(node.network_address, "10.0.0.1");
        assert_eq!(node.api_key, "test-api-key");
        assert_eq!(node.config["lighthouse"]["hosts"][0], "192.168.100.1");
    }

    #[test]
    fn test_node_record_round_trip() {
        let node: NodeRecord = serde_json::from_value(sample_json()).expect("parse node");
        let encoded = serde_json::to_string_pretty(&node).expect("serialize node");
        let decoded: NodeRecord = serde_json::from_str(&encoded).expect("reparse node");
        assert_eq!(node, decoded);
        assert!(encoded.contains("\"nebula_ip\": \"10.0.0.1\""));
    }

    #[test]
    fn test_node_record_missing_config_is_null() {
        let mut value = sample_json();
        value.as_object_mut().expect("object").remove("config");
        let node: NodeRecord = serde_json::from_value(value).expect("parse node");
        assert!(node.config.is_null());
    }

    #[test]
    fn test_node_record_null_api_key_and_ip_become_empty() {
        let mut value = sample_json();
        value["api_key"] = serde_json::Value::Null;
        value["nebula_ip"] = serde_json::Value::Null;
        let node: NodeRecord = serde_json::from_value(value).expect("parse node");
        assert_eq!(node.api_key, "");
        assert_eq!(node.network_address, "");
        assert_eq!(node.id, "40217527-d795-4f8d-a8d0-6f938130d77b");
    }

    #[test]
    fn test_node_record_missing_id_fails() {
        let mut value = sample_json();
        value.as_object_mut().expect("object").remove("id");
        assert!(serde_json::from_value::<NodeRecord>(value).is_err());
    }
}
