// 📎 Upload Gate - File-extension validation before bill submission
// Synchronous, stateful only in the held selection

// ============================================================================
// CONSTANTS
// ============================================================================

/// Extensions accepted for a justificatif, matched case-insensitively
/// against the file name's final suffix.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Exact notice shown to the user when a selection is rejected.
pub const REJECTION_NOTICE: &str =
    "Seuls les fichiers avec les extensions jpg, jpeg ou png sont autorisés.";

// ============================================================================
// TYPES
// ============================================================================

/// A file picked in the form, never mutated by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: &str, content: &[u8]) -> Self {
        SelectedFile {
            name: name.to_string(),
            content: content.to_vec(),
        }
    }
}

/// Outcome of offering a file to the gate. Rejection is a value, not an
/// error: it carries the user-facing notice and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDecision {
    Accepted,
    Rejected { notice: &'static str },
}

// ============================================================================
// UPLOAD GATE
// ============================================================================

/// UploadGate - Holds at most one validated file selection.
///
/// A single invalid file rejects the whole selection: the held file (if any)
/// is cleared so a resubmission attempt starts empty.
#[derive(Debug, Default)]
pub struct UploadGate {
    selection: Option<SelectedFile>,
}

impl UploadGate {
    pub fn new() -> Self {
        UploadGate { selection: None }
    }

    /// Check a file name against the allow-list.
    ///
    /// The match is on the final suffix only, so "photo.png.exe" is
    /// rejected, and a bare ".png" with no stem is rejected too.
    pub fn validate(file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
            _ => false,
        }
    }

    /// Offer a file to the gate: hold it if the extension is allowed,
    /// otherwise clear the selection and return the fixed notice.
    pub fn offer(&mut self, file: SelectedFile) -> UploadDecision {
        if Self::validate(&file.name) {
            self.selection = Some(file);
            UploadDecision::Accepted
        } else {
            self.selection = None;
            UploadDecision::Rejected {
                notice: REJECTION_NOTICE,
            }
        }
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================
