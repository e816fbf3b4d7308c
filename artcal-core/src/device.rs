//! Device classification.
//!
//! The encoder only sees a `DeviceClass`; how the runtime decides which class
//! it is lives here, matched against a configurable marker list.

use serde::{Deserialize, Serialize};

/// Markers that identify a phone or tablet browser in a user-agent string.
pub const DEFAULT_MOBILE_MARKERS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Receives a downloadable .ics file
    Mobile,
    /// Receives a calendar web link
    Desktop,
}

impl DeviceClass {
    pub fn from_flag(is_mobile_like: bool) -> Self {
        if is_mobile_like {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::Mobile => write!(f, "mobile"),
            DeviceClass::Desktop => write!(f, "desktop"),
        }
    }
}

/// Case-insensitive substring match of `user_agent` against `markers`.
pub fn classify_user_agent<S: AsRef<str>>(user_agent: &str, markers: &[S]) -> DeviceClass {
    let user_agent = user_agent.to_lowercase();
    let is_mobile = markers
        .iter()
        .map(|m| m.as_ref().trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .any(|m| user_agent.contains(&m));

    DeviceClass::from_flag(is_mobile)
}
