pub mod utils;

use std::path::{Path, PathBuf};

use common::{
    error::AppError,
    storage::{
        corpus::CorpusIndex,
        types::document::{Document, FileDescriptor},
    },
    utils::config::AppConfig,
};
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use utils::file_text_extraction::extract_text_from_file;

/// A file that was found but could not be loaded. The batch continues
/// without it.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub file_path: String,
    pub reason: String,
}

/// Per-item outcome of a corpus load.
#[derive(Debug, Default, Serialize)]
pub struct LoadReport {
    pub files: Vec<FileDescriptor>,
    pub skipped: Vec<SkippedFile>,
}

struct Candidate {
    path: PathBuf,
    file_name: String,
    mime_type: String,
}

/// Scans the configured document directory, extracts text per supported
/// type, and replaces the corpus with the new snapshot.
///
/// Individual failures are logged, recorded in the report, and skipped;
/// they never abort the batch. The snapshot swap is atomic: in-flight
/// ranking calls keep whichever snapshot they already hold.
pub async fn load_corpus(config: &AppConfig, corpus: &CorpusIndex) -> Result<LoadReport, AppError> {
    let candidates = scan_directory(Path::new(&config.documents_dir));

    let outcomes = join_all(candidates.into_iter().map(|candidate| async move {
        let text = extract_text_from_file(&candidate.path, &candidate.mime_type).await;
        (candidate, text)
    }))
    .await;

    let mut documents = Vec::with_capacity(outcomes.len());
    let mut report = LoadReport::default();

    for (candidate, outcome) in outcomes {
        let file_path = candidate.path.display().to_string();
        match outcome {
            Ok(text) => {
                report.files.push(FileDescriptor {
                    file_name: candidate.file_name.clone(),
                    file_path: file_path.clone(),
                    mime_type: candidate.mime_type.clone(),
                });
                documents.push(Document::new(
                    file_path,
                    candidate.file_name,
                    candidate.mime_type,
                    text,
                ));
            }
            Err(err) => {
                warn!(path = %file_path, error = %err, "skipping document");
                report.skipped.push(SkippedFile {
                    file_path,
                    reason: err.to_string(),
                });
            }
        }
    }

    corpus.replace(documents);
    info!(
        loaded = report.files.len(),
        skipped = report.skipped.len(),
        "corpus snapshot replaced"
    );

    Ok(report)
}

/// Walks the directory in file-name order so repeated loads produce the
/// same corpus order (ranking ties depend on it).
fn scan_directory(root: &Path) -> Vec<Candidate> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "failed to read directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let mime_type = supported_mime(entry.path())?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            Some(Candidate {
                path: entry.into_path(),
                file_name,
                mime_type,
            })
        })
        .collect()
}

fn supported_mime(path: &Path) -> Option<String> {
    let mime = mime_guess::from_path(path).first()?;
    matches!(mime.essence_str(), "application/pdf" | "text/plain")
        .then(|| mime.essence_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &Path) -> AppConfig {
        AppConfig {
            openai_api_key: "test-key".to_string(),
            openai_base_url: "http://localhost".to_string(),
            query_model: "test-model".to_string(),
            documents_dir: dir.display().to_string(),
            http_port: 0,
        }
    }

    #[tokio::test]
    async fn test_loads_text_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second document").unwrap();
        fs::write(dir.path().join("a.txt"), "first document").unwrap();

        let corpus = CorpusIndex::new();
        let report = load_corpus(&config_for(dir.path()), &corpus).await.unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(report.skipped.is_empty());

        let names: Vec<String> = corpus
            .documents()
            .iter()
            .map(|d| d.file_name.clone())
            .collect();
        assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_unsupported_types_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "kept").unwrap();
        fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();

        let corpus = CorpusIndex::new();
        let report = load_corpus(&config_for(dir.path()), &corpus).await.unwrap();

        assert_eq!(report.files.len(), 1);
        assert!(report.skipped.is_empty());
        assert_eq!(corpus.len(), 1);
    }

    #[tokio::test]
    async fn test_broken_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.txt"), "valid content").unwrap();
        fs::write(dir.path().join("broken.pdf"), "not actually a pdf").unwrap();

        let corpus = CorpusIndex::new();
        let report = load_corpus(&config_for(dir.path()), &corpus).await.unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].file_path.ends_with("broken.pdf"));
        assert_eq!(corpus.len(), 1);
    }

    #[tokio::test]
    async fn test_reload_replaces_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let removable = dir.path().join("old.txt");
        fs::write(&removable, "old content").unwrap();

        let corpus = CorpusIndex::new();
        load_corpus(&config_for(dir.path()), &corpus).await.unwrap();
        assert_eq!(corpus.len(), 1);

        fs::remove_file(&removable).unwrap();
        fs::write(dir.path().join("new.txt"), "new content").unwrap();

        let report = load_corpus(&config_for(dir.path()), &corpus).await.unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(
            corpus
                .documents()
                .first()
                .map(|d| d.file_name.clone()),
            Some("new.txt".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_directory_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let corpus = CorpusIndex::new();
        let report = load_corpus(&config_for(&missing), &corpus).await.unwrap();

        assert!(report.files.is_empty());
        assert!(corpus.is_empty());
    }
}
