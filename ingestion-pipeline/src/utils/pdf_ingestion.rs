use std::path::Path;

use common::error::AppError;

/// Extracts the embedded text layer from a PDF on a blocking task.
///
/// Scanned documents without a text layer come back empty, which is
/// reported as a load failure for that item rather than an empty corpus
/// entry.
pub async fn extract_pdf_text(file_path: &Path) -> Result<String, AppError> {
    let display_path = file_path.display().to_string();
    let pdf_bytes = tokio::fs::read(file_path).await?;

    let extraction = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&pdf_bytes).map(|text| text.trim().to_string())
    })
    .await?
    .map_err(|err| AppError::DocumentLoad {
        path: display_path.clone(),
        reason: format!("Failed to extract text from PDF: {err}"),
    })?;

    if extraction.is_empty() {
        return Err(AppError::DocumentLoad {
            path: display_path,
            reason: "PDF has no extractable text layer".to_string(),
        });
    }

    Ok(extraction)
}
