//! Frontend Models
//!
//! Data structures matching backend page records.

use serde::{Deserialize, Serialize};

/// Page record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: u32,
    pub keyword: String,
    #[serde(default)]
    pub parent: Option<u32>,
    #[serde(default)]
    pub nav_position: Option<i32>,
    #[serde(default)]
    pub footer_position: Option<i32>,
}

/// Which navigation menu a position applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    Header,
    Footer,
}

impl MenuType {
    /// Position of `page` in this menu, None if the page is not listed
    pub fn position_of(&self, page: &Page) -> Option<i32> {
        match self {
            MenuType::Header => page.nav_position,
            MenuType::Footer => page.footer_position,
        }
    }

    /// Backend field holding the position
    pub fn position_field(&self) -> &'static str {
        match self {
            MenuType::Header => "nav_position",
            MenuType::Footer => "footer_position",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuType::Header => "Header menu",
            MenuType::Footer => "Footer menu",
        }
    }
}

/// Create/update payload for a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDraft {
    pub keyword: String,
    pub parent: Option<u32>,
    pub nav_position: Option<i32>,
    pub footer_position: Option<i32>,
}
