use std::path::Path;

use common::error::AppError;

use super::pdf_ingestion::extract_pdf_text;

pub async fn extract_text_from_file(file_path: &Path, mime_type: &str) -> Result<String, AppError> {
    match mime_type {
        "text/plain" => {
            let content = tokio::fs::read_to_string(file_path).await?;
            Ok(content)
        }
        "application/pdf" => extract_pdf_text(file_path).await,
        other => Err(AppError::Validation(format!(
            "Unsupported mime type '{other}'"
        ))),
    }
}
