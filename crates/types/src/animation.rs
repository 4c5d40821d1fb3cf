use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options forwarded verbatim to a scripted animation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationOptions {
    /// Whether the backend should queue this animation behind running ones.
    pub queue: bool,
    #[serde(with = "millis")]
    pub duration: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            queue: false,
            duration: Duration::from_millis(800),
            easing: None,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_is_read_as_milliseconds() {
        let opts: AnimationOptions =
            serde_json::from_str(r#"{ "duration": 250, "easing": "linear" }"#).unwrap();
        assert_eq!(opts.duration, Duration::from_millis(250));
        assert_eq!(opts.easing.as_deref(), Some("linear"));
        assert!(!opts.queue);
    }
}
