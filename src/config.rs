use serde::Deserialize;

use crate::error::NavError;

/// Tunables for scroll-spy, smooth scrolling and the header.
///
/// Every field has a default matching the page's original behavior, so a
/// config script only needs the values it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Extra distance below the header at which a section counts as entered
    pub lead_in_px: f64,
    pub scroll_duration_ms: f64,
    /// Space left between the header and a scroll target
    pub target_gap_px: f64,
    /// Distances below this are jumped instead of animated
    pub jump_threshold_px: f64,
    pub highlight_gutter_px: f64,
    pub slide_breakpoint_px: f64,
    pub slide_min_px: f64,
    pub slide_max_px: f64,
    /// Fraction of the viewport width used when the nav has no offset
    pub slide_fallback_factor: f64,
    pub condense_after_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lead_in_px: 40.0,
            scroll_duration_ms: 1100.0,
            target_gap_px: 12.0,
            jump_threshold_px: 4.0,
            highlight_gutter_px: 8.0,
            slide_breakpoint_px: 1200.0,
            slide_min_px: 50.0,
            slide_max_px: 140.0,
            slide_fallback_factor: 0.07,
            condense_after_px: 24.0,
        }
    }
}

impl NavConfig {
    /// Parse a JSON config and validate it
    pub fn from_json(raw: &str) -> Result<Self, NavError> {
        let config: NavConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `from_json` but falls back to defaults when the script is absent or broken
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("Ignoring nav config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), NavError> {
        if !self.scroll_duration_ms.is_finite() || self.scroll_duration_ms <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "scrollDurationMs must be positive, got {}",
                self.scroll_duration_ms
            )));
        }
        let distances = [
            ("leadInPx", self.lead_in_px),
            ("targetGapPx", self.target_gap_px),
            ("jumpThresholdPx", self.jump_threshold_px),
            ("highlightGutterPx", self.highlight_gutter_px),
            ("slideBreakpointPx", self.slide_breakpoint_px),
            ("slideMinPx", self.slide_min_px),
            ("slideMaxPx", self.slide_max_px),
            ("condenseAfterPx", self.condense_after_px),
            ("slideFallbackFactor", self.slide_fallback_factor),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.slide_min_px > self.slide_max_px {
            return Err(NavError::InvalidConfig(format!(
                "slideMinPx ({}) exceeds slideMaxPx ({})",
                self.slide_min_px, self.slide_max_px
            )));
        }
        Ok(())
    }
}
