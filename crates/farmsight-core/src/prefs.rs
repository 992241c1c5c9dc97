//! User-scoped notification preferences.
//!
//! A single preference record gates which alert categories are eligible
//! for delivery and how the user wants them delivered. Preferences never
//! affect what the alert store contains, only what may be surfaced.

use serde::{Deserialize, Serialize};

use crate::alerts::AlertCategory;
use crate::error::{Error, Result};

/// How alerts reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMethod {
    /// In-app notification center only
    #[default]
    InApp,
    /// Email only
    Email,
    /// Both in-app and email
    Both,
}

impl DeliveryMethod {
    /// Get the delivery method as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::InApp => "in-app",
            Self::Email => "email",
            Self::Both => "both",
        }
    }

    /// Whether this method delivers via email.
    pub fn includes_email(&self) -> bool {
        matches!(self, Self::Email | Self::Both)
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often an email summary digest goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailSummaryFrequency {
    /// One digest per day
    Daily,
    /// One digest per week
    Weekly,
    /// Immediate emails only, no digest
    None,
}

/// Per-category delivery toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryPreferences {
    #[serde(default = "default_enabled")]
    pub weather: bool,
    #[serde(default = "default_enabled")]
    pub task: bool,
    #[serde(default = "default_enabled")]
    pub health: bool,
    #[serde(default = "default_enabled")]
    pub opportunity: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for CategoryPreferences {
    fn default() -> Self {
        Self {
            weather: true,
            task: true,
            health: true,
            opportunity: true,
        }
    }
}

impl CategoryPreferences {
    /// Whether alerts of the given category are enabled.
    pub fn is_enabled(&self, category: AlertCategory) -> bool {
        match category {
            AlertCategory::Weather => self.weather,
            AlertCategory::Task => self.task,
            AlertCategory::Health => self.health,
            AlertCategory::Opportunity => self.opportunity,
        }
    }

    /// Set the toggle for a category.
    pub fn set(&mut self, category: AlertCategory, enabled: bool) {
        match category {
            AlertCategory::Weather => self.weather = enabled,
            AlertCategory::Task => self.task = enabled,
            AlertCategory::Health => self.health = enabled,
            AlertCategory::Opportunity => self.opportunity = enabled,
        }
    }
}

/// User notification preferences.
///
/// Created once with defaults and replaced wholesale on save; there is no
/// lifecycle beyond the user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NotificationPreferences {
    /// Master on/off switch
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Per-category toggles
    #[serde(default)]
    pub categories: CategoryPreferences,
    /// Delivery route
    #[serde(default)]
    pub delivery_method: DeliveryMethod,
    /// Digest cadence; only meaningful when delivery includes email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_summary_frequency: Option<EmailSummaryFrequency>,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            categories: CategoryPreferences::default(),
            delivery_method: DeliveryMethod::InApp,
            email_summary_frequency: None,
        }
    }
}

impl NotificationPreferences {
    /// Check the record for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.email_summary_frequency.is_some() && !self.delivery_method.includes_email() {
            return Err(Error::invalid_preference(
                "email summary frequency set but delivery method is in-app only",
            ));
        }
        Ok(())
    }

    /// Parse a preferences payload, rejecting unknown keys.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let prefs: Self = serde_json::from_value(value)?;
        prefs.validate()?;
        Ok(prefs)
    }
}
