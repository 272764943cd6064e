#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use nebula_landing::common::NavigationError;
use nebula_landing::navigation::{LinkTarget, Navigator, SmartNavigation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Scroll(String),
    Route(String),
    External(String, LinkTarget),
}

/// In-memory navigator recording every dispatched call.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    element_ids: Arc<HashSet<String>>,
    calls: Arc<Mutex<Vec<Call>>>,
    fail_external: bool,
}

impl RecordingNavigator {
    pub fn with_elements(ids: &[&str]) -> Self {
        Self {
            element_ids: Arc::new(ids.iter().map(|id| id.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn failing_external() -> Self {
        Self {
            fail_external: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Navigator for RecordingNavigator {
    fn scroll_into_view(&self, id: &str) -> Result<(), NavigationError> {
        if !self.element_ids.contains(id) {
            return Err(NavigationError::ElementNotFound(id.to_string()));
        }
        self.record(Call::Scroll(id.to_string()));
        Ok(())
    }

    fn push_route(&self, path: &str) {
        self.record(Call::Route(path.to_string()));
    }

    fn open_external(&self, url: &str, target: LinkTarget) -> Result<(), NavigationError> {
        if self.fail_external {
            return Err(NavigationError::Browser("popup blocked".into()));
        }
        self.record(Call::External(url.to_string(), target));
        Ok(())
    }
}

pub fn page_navigation() -> (SmartNavigation, RecordingNavigator) {
    let recorder = RecordingNavigator::with_elements(&["hero", "features", "pricing", "cta", "footer"]);
    (SmartNavigation::new(recorder.clone()), recorder)
}
