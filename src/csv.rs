//! csv
//!
//! Tabular export of fixture pixel centers, one CSV file per screen.
//!
//! The format matches downstream pixel-mapping spreadsheets: a `x, y`
//! header and one row per fixture whose `InputRect` carries exactly four
//! corners. Fixtures with any other corner count are skipped silently.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::centroid::fixture_center;
use crate::core::screen::Screen;
use crate::ui::output::{self, Verbosity};

/// Errors from CSV extraction. All are fatal for the extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no DmxScreen elements found in {0}")]
    NoScreens(PathBuf),

    #[error("cannot write {0}: {1}")]
    WriteFailed(PathBuf, std::io::Error),
}

/// Render one screen's fixture centers as CSV text.
pub fn screen_csv(screen: &Screen) -> String {
    let mut out = String::from("x, y\n");
    for fixture in &screen.fixtures {
        if let Some(center) = fixture_center(fixture) {
            out.push_str(&format!("{}, {}\n", center.x, center.y));
        }
    }
    out
}

/// Write one CSV per screen into `out_dir`, named after the screen.
///
/// Fails if `screens` is empty; a document with no screens section has
/// nothing to extract and that is an error in this mode.
pub fn export_screens(
    screens: &[Screen],
    source: &Path,
    out_dir: &Path,
    verbosity: Verbosity,
) -> Result<(), ExtractError> {
    if screens.is_empty() {
        return Err(ExtractError::NoScreens(source.to_path_buf()));
    }
    std::fs::create_dir_all(out_dir)
        .map_err(|e| ExtractError::WriteFailed(out_dir.to_path_buf(), e))?;

    for screen in screens {
        let path = out_dir.join(format!("{}.csv", screen.name));
        std::fs::write(&path, screen_csv(screen))
            .map_err(|e| ExtractError::WriteFailed(path.clone(), e))?;
        output::print(
            format_args!("CSV generated for screen \"{}\" at: {}", screen.name, path.display()),
            verbosity,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    #[test]
    fn screen_csv_emits_header_and_centers() {
        let el = doc::parse_str(
            r#"<DmxScreen name="Wall">
                 <layers>
                   <DmxSlice width="1" height="1" colorFormat="RGB">
                     <InputRect>
                       <v x="0" y="0"/><v x="10" y="0"/><v x="10" y="10"/><v x="0" y="10"/>
                     </InputRect>
                   </DmxSlice>
                   <DmxSlice width="1" height="1" colorFormat="RGB">
                     <InputRect>
                       <v x="0" y="0"/><v x="2" y="0"/>
                     </InputRect>
                   </DmxSlice>
                   <DmxSlice width="1" height="1" colorFormat="RGB">
                     <InputRect>
                       <v x="20" y="0"/><v x="30" y="0"/><v x="30" y="10"/><v x="20" y="10"/>
                     </InputRect>
                   </DmxSlice>
                 </layers>
               </DmxScreen>"#,
        )
        .unwrap();
        let screen = Screen::from_element(el, "wall.xml").unwrap();

        // The two-corner slice contributes no row.
        assert_eq!(screen_csv(&screen), "x, y\n5, 5\n25, 5\n");
    }

    #[test]
    fn screen_without_rects_yields_header_only() {
        let el = doc::parse_str(
            r#"<DmxScreen name="Bare"><layers><DmxSlice width="2" height="2"/></layers></DmxScreen>"#,
        )
        .unwrap();
        let screen = Screen::from_element(el, "bare.xml").unwrap();
        assert_eq!(screen_csv(&screen), "x, y\n");
    }

    #[test]
    fn export_requires_at_least_one_screen() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = export_screens(&[], Path::new("in.xml"), dir.path(), Verbosity::Quiet)
            .unwrap_err();
        assert!(matches!(err, ExtractError::NoScreens(_)));
    }
}
