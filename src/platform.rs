//! Platform detection.
//!
//! Only used for cosmetic scaling and for picking which widget variants the
//! screen shows; the event log never looks at it.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Android,
    Ios,
    #[default]
    Other,
}

impl Os {
    /// Best guess for the host the binary runs on.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "android" => Os::Android,
            "ios" => Os::Ios,
            _ => Os::Other,
        }
    }
}

impl FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Os::Android),
            "ios" | "tvos" => Ok(Os::Ios),
            "other" => Ok(Os::Other),
            _ => Err(format!("unknown os '{}': expected android, ios or other", s)),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Os::Android => "android",
            Os::Ios => "ios",
            Os::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub is_tv: bool,
}

impl Platform {
    pub fn new(os: Os, is_tv: bool) -> Self {
        Platform { os, is_tv }
    }

    pub fn detect() -> Self {
        Platform::new(Os::current(), false)
    }

    /// Size multiplier for panels: Apple TV screens get double size.
    pub fn scale(&self) -> u16 {
        if self.is_tv && self.os == Os::Ios {
            2
        } else {
            1
        }
    }

    /// Native-feedback touchables only exist on Android.
    pub fn has_native_feedback(&self) -> bool {
        self.os == Os::Android
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(Platform::new(Os::Ios, true).scale(), 2);
        assert_eq!(Platform::new(Os::Ios, false).scale(), 1);
        assert_eq!(Platform::new(Os::Android, true).scale(), 1);
        assert_eq!(Platform::new(Os::Other, false).scale(), 1);
    }

    #[test]
    fn test_parse_os() {
        assert_eq!("Android".parse::<Os>(), Ok(Os::Android));
        assert_eq!("tvos".parse::<Os>(), Ok(Os::Ios));
        assert!("windows".parse::<Os>().is_err());
    }

    #[test]
    fn test_native_feedback_only_on_android() {
        assert!(Platform::new(Os::Android, true).has_native_feedback());
        assert!(!Platform::new(Os::Ios, true).has_native_feedback());
    }
}
