use crate::constants::CONSOLE_CAPACITY;
use chrono::Local;

/// Developer console: diagnostic lines shown beside the transcript.
#[derive(Debug)]
pub struct DevConsole {
    pub entries: Vec<String>,
    pub visible: bool,
}

impl DevConsole {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            visible: true,
        }
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = format!("{} {}", Local::now().format("%H:%M:%S"), entry.into());
        log::debug!("console: {}", entry);
        self.entries.push(entry);
        if self.entries.len() > CONSOLE_CAPACITY {
            self.entries.remove(0);
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for DevConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_dropped_past_capacity() {
        let mut console = DevConsole::new();
        for i in 0..CONSOLE_CAPACITY + 5 {
            console.add(format!("line {}", i));
        }

        assert_eq!(console.entries.len(), CONSOLE_CAPACITY);
        assert!(console.entries[0].ends_with("line 5"));
    }
}
