//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{AdminConfig, PositionerConfig};
use crate::models::Page;

/// What the page form is currently doing
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    /// New page under the given parent (None = root)
    Create { parent: Option<u32> },
    Edit(Page),
}

impl Default for FormMode {
    fn default() -> Self {
        FormMode::Create { parent: None }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload pages from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload pages from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current form mode - read
    pub form_mode: ReadSignal<FormMode>,
    /// Current form mode - write
    set_form_mode: WriteSignal<FormMode>,
    config: StoredValue<AdminConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        form_mode: (ReadSignal<FormMode>, WriteSignal<FormMode>),
        config: AdminConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            form_mode: form_mode.0,
            set_form_mode: form_mode.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of pages
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Start creating a page under `parent`
    pub fn create_under(&self, parent: Option<u32>) {
        self.set_form_mode.set(FormMode::Create { parent });
    }

    pub fn edit(&self, page: Page) {
        self.set_form_mode.set(FormMode::Edit(page));
    }

    pub fn api_base(&self) -> String {
        self.config.with_value(|c| c.api_base.clone())
    }

    pub fn positioner_config(&self) -> PositionerConfig {
        self.config.with_value(|c| c.positioner)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
