use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient user-visible message, shown once and then dropped.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub description: String,
}

impl Notice {
    pub fn info(title: &'static str, description: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, title, description: description.into() }
    }

    pub fn error(title: &'static str, description: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, title, description: description.into() }
    }
}
