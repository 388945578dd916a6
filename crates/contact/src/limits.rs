use serde::Deserialize;

pub const MAX_FILES: usize = 3;
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

const MIB: usize = 1024 * 1024;

/// Attachment ceilings shared by the relay and the form encoder.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

fn default_max_files() -> usize {
    MAX_FILES
}

fn default_max_file_size() -> usize {
    MAX_FILE_SIZE
}

impl Limits {
    /// Whole-body ceiling: every attachment at its maximum plus 1 MiB for text fields
    /// and multipart framing.
    pub fn body_limit(&self) -> usize {
        self.max_files
            .saturating_mul(self.max_file_size)
            .saturating_add(MIB)
    }

    /// Per-file ceiling rounded up to whole MiB, for user-facing messages.
    pub fn max_file_size_mib(&self) -> usize {
        self.max_file_size.div_ceil(MIB)
    }
}
