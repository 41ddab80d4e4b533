// Native "Save As" dialog.

use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Ask where to save. None when the user cancels.
pub fn ask_save_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save Image As")
        .add_filter("PNG files", &["png"])
        .add_filter("All files", &["*"])
        .set_file_name("untitled.png")
        .save_file()
        .map(|p| with_default_extension(&p))
}

/// Append `.png` when the chosen name has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("png")
    }
}
