//! Clipboard sinks for the "copy CSS" action.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Clipboard write failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard error: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        ClipboardError(e.to_string())
    }
}

/// Somewhere exported CSS can be written to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

// ── SystemClipboard ───────────────────────────────────────────────────────

/// The OS clipboard via `arboard`.
///
/// The platform handle is opened on first write, so constructing one never
/// fails and headless sessions that never copy never touch the display server.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let handle = match &mut self.handle {
            Some(handle) => handle,
            slot => slot.insert(arboard::Clipboard::new()?),
        };
        handle.set_text(text.to_owned())?;
        Ok(())
    }
}

// ── MemoryClipboard ───────────────────────────────────────────────────────

/// In-process clipboard. Keeps the last written text.
///
/// Clones share the same slot, so a handle kept outside the editor sees
/// what "copy CSS" wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}
