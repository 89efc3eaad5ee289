use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `https://wa.me/<digits>?text=<message>`; everything but digits is
/// stripped from the phone number.
pub fn deep_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, encode_component(message))
}

/// Host capability that hands a URL to whatever handles it.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform launcher.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        } else {
            Command::new("xdg-open")
        };
        command.arg(url);
        spawn_reaped(command).map(|_| ())
    }
}

/// Spawns `command` detached from the terminal and waits on it from a
/// background thread so the launcher never lingers as a zombie.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(std::thread::spawn(move || {
        let status = child.wait();
        if let Ok(status) = &status {
            log::debug!("url launcher exited with {}", status);
        }
        status
    }))
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: parking_lot::Mutex<Vec<String>>,
}

#[cfg(test)]
impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingState {
    pub phone: String,
    pub connecting: bool,
    pub connected: bool,
}

impl MessagingState {
    /// Validates the number and marks the connection as in flight.
    pub fn begin_connect(&mut self, phone: &str) -> bool {
        let phone = phone.trim();
        if phone.is_empty() {
            return false;
        }
        self.phone = phone.to_string();
        self.connecting = true;
        true
    }

    pub fn complete_connect(&mut self) {
        self.connecting = false;
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.connecting = false;
        self.phone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(encode_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
    }

    #[test]
    fn test_deep_link_strips_phone_formatting() {
        let url = deep_link("+91 98765-43210", "Hello from KrishiMitra!");
        assert_eq!(url, "https://wa.me/919876543210?text=Hello%20from%20KrishiMitra!");
    }

    #[test]
    fn test_deep_link_encodes_hindi() {
        let url = deep_link("9876543210", "नमस्ते");
        assert!(url.starts_with("https://wa.me/9876543210?text=%E0%A4%A8"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_blank_phone_is_rejected() {
        let mut state = MessagingState::default();
        assert!(!state.begin_connect("   "));
        assert!(!state.connecting);

        assert!(state.begin_connect(" +91 9876543210 "));
        assert_eq!(state.phone, "+91 9876543210");
        state.complete_connect();
        assert!(state.connected && !state.connecting);

        state.disconnect();
        assert!(!state.connected);
        assert!(state.phone.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_child_is_waited_on() {
        let handle = spawn_reaped(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());

        let handle = spawn_reaped(Command::new("false")).unwrap();
        assert!(!handle.join().unwrap().unwrap().success());
    }

    #[test]
    fn test_missing_launcher_is_an_error() {
        let command = Command::new("krishimitra-no-such-launcher");
        assert!(spawn_reaped(command).is_err());
    }

    #[test]
    fn test_recording_opener() {
        let opener = RecordingOpener::default();
        opener.open("https://wa.me/1").unwrap();
        assert_eq!(opener.opened.lock().as_slice(), ["https://wa.me/1".to_string()]);
    }
}
