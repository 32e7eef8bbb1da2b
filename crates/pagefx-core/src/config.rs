#![forbid(unsafe_code)]

//! Markup contract configuration.
//!
//! The defaults match the stock page markup: a `#myBtn` scroll-to-top
//! control, two slideshows collected by the `mySlides1` and `mySlides2`
//! classes, `a.smooth-scroll` anchors, and a global `plusSlides` hook for
//! inline prev/next buttons. Hosts may override any field from JSON:
//!
//! ```json
//! { "slideshow_classes": ["hero", "gallery"], "scroll_threshold": 64 }
//! ```

use serde::Deserialize;

use crate::scroll_top::DEFAULT_SCROLL_THRESHOLD;

/// Configuration loading/validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page config field `{field}` must not be empty")]
    Empty { field: &'static str },

    #[error("scroll threshold must be a finite, non-negative number (got {0})")]
    Threshold(f64),

    #[error("slideshow class `{0}` is listed more than once")]
    DuplicateSlideshow(String),
}

/// Element identifiers and tuning for the page interactions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// `id` of the scroll-to-top control.
    pub scroll_button_id: String,
    /// Offset (CSS px) the page must scroll past before the control shows.
    pub scroll_threshold: f64,
    /// One class name per slideshow instance, in instance-index order.
    pub slideshow_classes: Vec<String>,
    /// CSS selector matching smooth-scroll anchor triggers.
    pub anchor_selector: String,
    /// Name of the global advance function installed for inline handlers.
    pub advance_hook: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_button_id: "myBtn".to_owned(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            slideshow_classes: vec!["mySlides1".to_owned(), "mySlides2".to_owned()],
            anchor_selector: "a.smooth-scroll".to_owned(),
            advance_hook: "plusSlides".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check identifiers are non-empty and the threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scroll_button_id.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "scroll_button_id",
            });
        }
        if self.anchor_selector.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "anchor_selector",
            });
        }
        if self.advance_hook.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "advance_hook",
            });
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ConfigError::Threshold(self.scroll_threshold));
        }
        for (idx, class) in self.slideshow_classes.iter().enumerate() {
            if class.trim().is_empty() {
                return Err(ConfigError::Empty {
                    field: "slideshow_classes",
                });
            }
            if self.slideshow_classes[..idx].contains(class) {
                return Err(ConfigError::DuplicateSlideshow(class.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_stock_markup() {
        let config = PageConfig::default();
        assert_eq!(config.scroll_button_id, "myBtn");
        assert_eq!(config.scroll_threshold, 20.0);
        assert_eq!(config.slideshow_classes, vec!["mySlides1", "mySlides2"]);
        assert_eq!(config.anchor_selector, "a.smooth-scroll");
        assert_eq!(config.advance_hook, "plusSlides");
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"slideshow_classes":["hero"]}"#)
            .expect("partial config should parse");
        assert_eq!(config.slideshow_classes, vec!["hero"]);
        assert_eq!(config.scroll_button_id, "myBtn");
    }

    #[test]
    fn empty_json_object_is_default() {
        let config = PageConfig::from_json("{}").expect("empty object should parse");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = PageConfig::from_json("{").expect_err("truncated json");
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = PageConfig::from_json(r#"{"scroll_btn":"x"}"#).expect_err("typo field");
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn validation_failures() {
        let err = PageConfig::from_json(r#"{"scroll_button_id":"  "}"#).expect_err("blank id");
        assert!(matches!(
            err,
            ConfigError::Empty {
                field: "scroll_button_id"
            }
        ));

        let err = PageConfig::from_json(r#"{"scroll_threshold":-1}"#).expect_err("negative");
        assert!(matches!(err, ConfigError::Threshold(t) if t == -1.0));

        let err = PageConfig::from_json(r#"{"slideshow_classes":["a","b","a"]}"#)
            .expect_err("duplicate");
        assert_eq!(err.to_string(), "slideshow class `a` is listed more than once");
    }
}
