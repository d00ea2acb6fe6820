use std::path::PathBuf;

use serde::Serialize;

use crate::paths::PathsSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub info: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1976D2",
            secondary: "#424242",
            success: "#4CAF50",
            warning: "#FF9800",
            danger: "#F44336",
            info: "#2196F3",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UiSettings {
    pub window_min_width: u32,
    pub window_min_height: u32,
    pub window_title: String,
    pub palette: Palette,
    pub theme: Theme,
    pub stylesheet: PathBuf,
}

impl UiSettings {
    pub fn new(paths: &PathsSettings) -> Self {
        Self {
            window_min_width: 1024,
            window_min_height: 768,
            window_title: "SmartInstall - نظام إدارة المبيعات بالتقسيط".into(),
            palette: Palette::default(),
            theme: Theme::Light,
            stylesheet: paths.views_dir.join("styles.qss"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NotificationStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub duration_ms: u64,
    palette: Palette,
}

impl NotificationSettings {
    pub fn new(palette: Palette) -> Self {
        Self {
            enabled: true,
            duration_ms: 5000,
            palette,
        }
    }

    pub fn style(&self, kind: NotificationKind) -> NotificationStyle {
        match kind {
            NotificationKind::Info => NotificationStyle {
                icon: "info",
                color: self.palette.info,
            },
            NotificationKind::Success => NotificationStyle {
                icon: "check_circle",
                color: self.palette.success,
            },
            NotificationKind::Warning => NotificationStyle {
                icon: "warning",
                color: self.palette.warning,
            },
            NotificationKind::Error => NotificationStyle {
                icon: "error",
                color: self.palette.danger,
            },
        }
    }
}

/// Toggle for an experimental feature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewFeature {
    pub enabled: bool,
    pub version: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub quick_reports: PreviewFeature,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            quick_reports: PreviewFeature {
                enabled: true,
                version: "preview".into(),
                description: "Raptor mini (preview): quick report rendering".into(),
            },
        }
    }
}
