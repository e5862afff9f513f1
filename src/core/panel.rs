//! State of the collapsible "advanced parameters" panel.
//!
//! The state is a plain value. Reading it from a request's `Cookie` header
//! and writing it back through `Set-Cookie` are explicit conversions, so the
//! presentation layer decides when either happens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Text of the button that flips the panel from this state.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Open => "Hide Advanced Parameters",
            Self::Closed => "Show Advanced Parameters",
        }
    }

    pub fn cookie_value(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Anything other than "open" reads as closed.
    pub fn from_cookie_value(value: &str) -> Self {
        if value.trim() == "open" {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Read the state out of a `Cookie` request header.
    pub fn from_cookie_header(header: &str, name: &str) -> Self {
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| key.trim() == name)
            .map(|(_, value)| Self::from_cookie_value(value))
            .unwrap_or_default()
    }

    /// `Set-Cookie` value persisting this state.
    pub fn set_cookie(&self, name: &str) -> String {
        format!("{}={}; Path=/; SameSite=Lax", name, self.cookie_value())
    }
}
