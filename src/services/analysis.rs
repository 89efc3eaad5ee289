use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{AnalysisResult, Language, Localized, PendingImage};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

const DISEASE: Localized = Localized::new("Leaf Spot Disease", "पत्ती का धब्बा रोग");

const RECOMMENDATIONS: [Localized; 3] = [
    Localized::new("Apply copper oxychloride spray", "कॉपर ऑक्सीक्लोराइड का छिड़काव करें"),
    Localized::new("Remove affected leaves", "प्रभावित पत्तियों को हटा दें"),
    Localized::new("Improve drainage", "ड्रेनेज में सुधार करें"),
];

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{0} is not an image file")]
    NotImage(PathBuf),
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ImageError {
    pub fn message_key(&self) -> &'static str {
        match self {
            ImageError::NotImage(_) => "notify.not_image",
            ImageError::Unreadable { .. } => "notify.image_unreadable",
        }
    }
}

/// State of the image analysis panel, shared by every view that offers it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisState {
    pub image: Option<PendingImage>,
    pub busy: bool,
    pub result: Option<AnalysisResult>,
}

impl AnalysisState {
    pub fn begin(&mut self, image: PendingImage) {
        self.image = Some(image);
        self.result = None;
        self.busy = true;
    }

    pub fn complete(&mut self, result: AnalysisResult) {
        self.busy = false;
        self.result = Some(result);
    }
}

/// Checks the path names a readable image and captures what the panel shows
/// about it.
pub fn inspect_image(raw: &str) -> Result<PendingImage, ImageError> {
    let path = expand_home(raw.trim());
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !is_image {
        return Err(ImageError::NotImage(path));
    }

    let metadata = std::fs::metadata(&path).map_err(|source| ImageError::Unreadable {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ImageError::Unreadable {
            path,
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(PendingImage {
        path,
        file_name,
        size_bytes: metadata.len(),
    })
}

fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| Path::new(raw).to_path_buf()),
        None => PathBuf::from(raw),
    }
}

/// The canned diagnosis every submitted image receives.
pub fn mock_result(language: Language) -> AnalysisResult {
    AnalysisResult {
        crop_health_score: 85,
        disease_label: DISEASE.get(language).to_string(),
        confidence_score: 92,
        recommendations: RECOMMENDATIONS
            .iter()
            .map(|rec| rec.get(language).to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mock_result_english() {
        let result = mock_result(Language::En);
        assert_eq!(result.crop_health_score, 85);
        assert_eq!(result.confidence_score, 92);
        assert_eq!(result.disease_label, "Leaf Spot Disease");
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[0], "Apply copper oxychloride spray");
    }

    #[test]
    fn test_mock_result_hindi() {
        let result = mock_result(Language::Hi);
        assert_eq!(result.disease_label, "पत्ती का धब्बा रोग");
        assert_eq!(result.recommendations[2], "ड्रेनेज में सुधार करें");
    }

    #[test]
    fn test_inspect_image_reads_metadata() {
        let mut file = tempfile::Builder::new().suffix(".JPG").tempfile().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let image = inspect_image(file.path().to_str().unwrap()).unwrap();
        assert_eq!(image.size_bytes, 2048);
        assert!(image.file_name.ends_with(".JPG"));
    }

    #[test]
    fn test_inspect_image_rejects_other_files() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = inspect_image(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ImageError::NotImage(_)));
        assert_eq!(err.message_key(), "notify.not_image");
    }

    #[test]
    fn test_inspect_image_missing_file() {
        let err = inspect_image("/definitely/not/here/leaf.png").unwrap_err();
        assert!(matches!(err, ImageError::Unreadable { .. }));
    }

    #[test]
    fn test_state_transitions() {
        let mut state = AnalysisState::default();
        state.begin(PendingImage {
            path: PathBuf::from("leaf.png"),
            file_name: "leaf.png".into(),
            size_bytes: 10,
        });
        assert!(state.busy);
        assert!(state.result.is_none());

        state.complete(mock_result(Language::En));
        assert!(!state.busy);
        assert!(state.result.is_some());
    }
}
