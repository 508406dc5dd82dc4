use component_detection_submission::prelude::*;

/// Mock PlatformLogger for testing that captures messages with their level
#[derive(Default, Clone)]
pub struct MockPlatformLogger {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockPlatformLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages logged at `level`, without the prefix.
    pub fn messages_at(&self, level: &str) -> Vec<String> {
        let prefix = format!("{}: ", level);
        self.get_messages()
            .iter()
            .filter_map(|m| m.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }

    fn push(&self, level: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{}: {}", level, message));
    }
}

impl PlatformLogger for MockPlatformLogger {
    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn warning(&self, message: &str) {
        self.push("warning", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn set_failed(&self, message: &str) {
        self.push("failed", message);
    }
}
