use crate::client::FolderId;
use std::fmt;
use std::io::{self, Write};
use tracing::error;
use url::Url;

/// Pages a deletion trigger may send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// `/folders`
    Folders,
    /// `/folders/<folderId>`
    Folder(FolderId),
}

impl Destination {
    /// Root-relative path of the page. The folder id is a single path
    /// segment, so reserved characters in it are percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Folders => String::from("/folders"),
            Self::Folder(folder_id) => {
                format!("/folders/{}", urlencoding::encode(folder_id.as_str()))
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Whatever moves the user to another page once a remote change is done.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

/// Remembers every navigation instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Vec<Destination>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[Destination] {
        &self.visited
    }

    pub fn last(&self) -> Option<&Destination> {
        self.visited.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.visited.push(destination);
    }
}

/// Prints the absolute URL of the destination, one per line.
pub struct PrintNavigator<W: Write> {
    base: Url,
    out: W,
}

impl PrintNavigator<io::Stdout> {
    pub fn stdout(base: Url) -> Self {
        Self::new(base, io::stdout())
    }
}

impl<W: Write> PrintNavigator<W> {
    pub fn new(base: Url, out: W) -> Self {
        Self { base, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn navigate(&mut self, destination: Destination) {
        // Root-relative, the same way a browser resolves `/folders`
        let url = match self.base.join(&destination.path()) {
            Ok(url) => url,
            Err(e) => {
                error!("Unable to resolve {destination} against {}: {e}", self.base);
                return;
            }
        };

        if let Err(e) = writeln!(self.out, "{url}") {
            error!("Failed to print destination: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folders_listing_path() {
        assert_eq!(Destination::Folders.path(), "/folders");
    }

    #[test]
    fn folder_path_keeps_plain_ids() {
        assert_eq!(Destination::Folder(FolderId::from("f1")).path(), "/folders/f1");
        assert_eq!(Destination::Folder(FolderId::from("42")).path(), "/folders/42");
    }

    #[test]
    fn folder_path_encodes_reserved_characters() {
        let destination = Destination::Folder(FolderId::from("a/b c?#"));
        assert_eq!(destination.path(), "/folders/a%2Fb%20c%3F%23");
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let mut navigator = RecordingNavigator::new();
        navigator.navigate(Destination::Folders);
        navigator.navigate(Destination::Folder(FolderId::from("f2")));

        assert_eq!(navigator.visited().len(), 2);
        assert_eq!(
            navigator.last(),
            Some(&Destination::Folder(FolderId::from("f2")))
        );
    }

    #[test]
    fn print_navigator_resolves_from_host_root() {
        let base = Url::parse("http://localhost:8080/app/").unwrap();
        let mut navigator = PrintNavigator::new(base, Vec::new());
        navigator.navigate(Destination::Folder(FolderId::from("f1")));

        let printed = String::from_utf8(navigator.into_inner()).unwrap();
        assert_eq!(printed, "http://localhost:8080/folders/f1\n");
    }
}
