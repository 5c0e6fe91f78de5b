/// A streaming service and its RTMP ingest endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub name: &'static str,
    pub rtmp_url: &'static str,
}

/// Menu order. The first entry is the fallback for invalid selections and
/// an empty `rtmp_url` means the user types one in.
pub static PLATFORMS: [Platform; 7] = [
    Platform {
        name: "YouTube",
        rtmp_url: "rtmp://a.rtmp.youtube.com/live2",
    },
    Platform {
        name: "Twitch",
        rtmp_url: "rtmp://live.twitch.tv/app",
    },
    Platform {
        name: "Facebook",
        rtmp_url: "rtmp://live-api-s.facebook.com:80/rtmp",
    },
    Platform {
        name: "Instagram",
        rtmp_url: "rtmp://live-upload.instagram.com:80/rtmp",
    },
    Platform {
        name: "TikTok",
        rtmp_url: "rtmp://rtmp-push.tiktok.com/live",
    },
    Platform {
        name: "LinkedIn",
        rtmp_url: "rtmp://rtmp.linkedin.com/live",
    },
    Platform {
        name: "Custom",
        rtmp_url: "",
    },
];

impl Platform {
    pub fn is_custom(&self) -> bool {
        self.rtmp_url.is_empty()
    }

    /// Looks up a 1-based menu selection.
    pub fn from_selection(input: &str) -> Option<&'static Platform> {
        let index: usize = input.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| PLATFORMS.get(i))
    }
}

/// The platform the user ended up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformChoice {
    pub name: String,
    pub rtmp_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_one_based() {
        assert_eq!(Platform::from_selection("1").map(|p| p.name), Some("YouTube"));
        assert_eq!(Platform::from_selection(" 6 ").map(|p| p.name), Some("LinkedIn"));
        assert_eq!(Platform::from_selection("7").map(|p| p.name), Some("Custom"));
    }

    #[test]
    fn test_out_of_range_selections() {
        assert!(Platform::from_selection("0").is_none());
        assert!(Platform::from_selection("8").is_none());
        assert!(Platform::from_selection("-1").is_none());
        assert!(Platform::from_selection("twitch").is_none());
        assert!(Platform::from_selection("").is_none());
    }

    #[test]
    fn test_only_custom_has_no_url() {
        let custom: Vec<&str> = PLATFORMS
            .iter()
            .filter(|p| p.is_custom())
            .map(|p| p.name)
            .collect();
        assert_eq!(custom, vec!["Custom"]);
    }
}
