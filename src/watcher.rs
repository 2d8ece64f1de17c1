//! File system watcher for watch mode

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Watches the bug-record file and reports when it is created or modified
pub struct InputWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    file_name: OsString,
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

impl InputWatcher {
    /// Start watching `input`. The parent directory is watched so that
    /// editors that replace the file on save are still noticed.
    pub fn watch(input: &Path) -> notify::Result<Self> {
        let file_name = input
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| notify::Error::generic("input path has no file name"))?;
        let dir = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            file_name,
        })
    }

    /// Whether the event touches the watched file
    fn is_relevant(&self, event: &notify::Event) -> bool {
        is_create_or_modify(&event.kind)
            && event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(self.file_name.as_os_str()))
    }

    /// Block until the input changes, then drain further events for DEBOUNCE_MS.
    /// Returns false once the watcher has shut down.
    pub fn next_change(&self) -> bool {
        loop {
            match self.receiver.recv_timeout(Duration::from_secs(3600)) {
                Ok(Ok(event)) if self.is_relevant(&event) => break,
                Ok(_) | Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while self.receiver.try_recv().is_ok() {}
        true
    }
}
