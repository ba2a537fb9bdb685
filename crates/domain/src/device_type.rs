//! Device type: the category picked in the "add device" form selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A device category as submitted by the form selector.
///
/// Unknown selector values are kept verbatim in [`DeviceType::Other`] so the
/// string round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    /// A plain device with no protocol-specific settings (`"device"`).
    Generic,
    /// TP-Link HS1xx smart plug, reached by IP address.
    TpLinkSmartPlug,
    /// DS18B20 one-wire temperature probe, addressed by serial number.
    Ds18b20,
    /// Any value outside the known set.
    Other(String),
}

impl DeviceType {
    pub const GENERIC: &'static str = "device";
    pub const TP_LINK_SMART_PLUG: &'static str = "tp_link_smart_plug";
    pub const DS18B20: &'static str = "ds18b20";

    /// Parse a selector value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            Self::GENERIC => Self::Generic,
            Self::TP_LINK_SMART_PLUG => Self::TpLinkSmartPlug,
            Self::DS18B20 => Self::Ds18b20,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The selector value for this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generic => Self::GENERIC,
            Self::TpLinkSmartPlug => Self::TP_LINK_SMART_PLUG,
            Self::Ds18b20 => Self::DS18B20,
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DeviceType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for DeviceType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DeviceType> for String {
    fn from(value: DeviceType) -> Self {
        match value {
            DeviceType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_types() {
        assert_eq!(DeviceType::parse("device"), DeviceType::Generic);
        assert_eq!(
            DeviceType::parse("tp_link_smart_plug"),
            DeviceType::TpLinkSmartPlug
        );
        assert_eq!(DeviceType::parse("ds18b20"), DeviceType::Ds18b20);
    }

    #[test]
    fn should_keep_unknown_value_verbatim() {
        let kind = DeviceType::parse("zigbee_bulb");
        assert_eq!(kind, DeviceType::Other("zigbee_bulb".to_string()));
        assert_eq!(kind.to_string(), "zigbee_bulb");
    }

    #[test]
    fn should_be_case_sensitive() {
        assert!(matches!(DeviceType::parse("DS18B20"), DeviceType::Other(_)));
    }

    #[test]
    fn should_serialize_as_selector_value() {
        let json = serde_json::to_string(&DeviceType::TpLinkSmartPlug).unwrap();
        assert_eq!(json, "\"tp_link_smart_plug\"");
        let parsed: DeviceType = serde_json::from_str("\"ds18b20\"").unwrap();
        assert_eq!(parsed, DeviceType::Ds18b20);
    }
}
