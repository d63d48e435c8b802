//! template
//!
//! Assembles the merged document by substituting placeholders in a
//! template file, then writes it out without ever overwriting an
//! existing file.
//!
//! # Placeholders
//!
//! - `[NAME]` - the display name passed via `--name`
//! - `[SCREENS]` - the serialized, re-identified `DmxScreen` elements

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Placeholder replaced with the display name.
pub const NAME_PLACEHOLDER: &str = "[NAME]";
/// Placeholder replaced with the serialized screens.
pub const SCREENS_PLACEHOLDER: &str = "[SCREENS]";

/// Errors from template rendering and output writing. All are fatal.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("cannot read template {0}: {1}")]
    UnreadableTemplate(PathBuf, std::io::Error),

    #[error("output file {0} already exists, choose a different name")]
    OutputExists(PathBuf),

    #[error("cannot write output {0}: {1}")]
    WriteFailed(PathBuf, std::io::Error),
}

/// Derive the output base name from a display name: whitespace runs
/// become single underscores.
///
/// # Example
///
/// ```
/// use aomerge::template::base_name;
///
/// assert_eq!(base_name("Kosmos Spacetime 2024"), "Kosmos_Spacetime_2024");
/// ```
pub fn base_name(display_name: &str) -> String {
    display_name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Substitute both placeholders in the template's text.
///
/// Each placeholder is replaced at its first occurrence only, matching
/// how the templates are authored (one slot each).
pub fn render(
    template_path: &Path,
    display_name: &str,
    screens_xml: &str,
) -> Result<String, TemplateError> {
    let template = std::fs::read_to_string(template_path)
        .map_err(|e| TemplateError::UnreadableTemplate(template_path.to_path_buf(), e))?;
    let content = template.replacen(SCREENS_PLACEHOLDER, screens_xml, 1);
    Ok(content.replacen(NAME_PLACEHOLDER, display_name, 1))
}

/// Write the rendered document, refusing to clobber an existing file.
///
/// Parent directories are created as needed.
pub fn write_output(path: &Path, content: &str) -> Result<(), TemplateError> {
    if path.exists() {
        return Err(TemplateError::OutputExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| TemplateError::WriteFailed(path.to_path_buf(), e))?;
    }
    std::fs::write(path, content).map_err(|e| TemplateError::WriteFailed(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<XmlState name=\"[NAME]\">\n<screens>\n[SCREENS]\n</screens>\n</XmlState>\n";

    #[test]
    fn base_name_collapses_whitespace_runs() {
        assert_eq!(base_name("New File"), "New_File");
        assert_eq!(base_name("a  \t b"), "a_b");
        assert_eq!(base_name("solo"), "solo");
    }

    #[test]
    fn render_substitutes_both_placeholders() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.xml");
        std::fs::write(&template, TEMPLATE).unwrap();

        let out = render(&template, "Club Rig", "<DmxScreen name=\"A\"/>").unwrap();
        assert!(out.contains("name=\"Club Rig\""));
        assert!(out.contains("<DmxScreen name=\"A\"/>"));
        assert!(!out.contains(NAME_PLACEHOLDER));
        assert!(!out.contains(SCREENS_PLACEHOLDER));
    }

    #[test]
    fn missing_template_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = render(&dir.path().join("absent.xml"), "x", "y").unwrap_err();
        assert!(matches!(err, TemplateError::UnreadableTemplate(..)));
    }

    #[test]
    fn write_output_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xml").join("new.xml");

        write_output(&path, "first").unwrap();
        let err = write_output(&path, "second").unwrap_err();
        assert!(matches!(err, TemplateError::OutputExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }
}
