use crate::GalleryView;
use photo_api::{PhotoApiError, PhotoBackend, PhotoUpload};
use tracing::error;

/// Drives the upload flow. One atomic PUT per invocation; no retry, no
/// progress reporting.
pub struct UploadController<B> {
    backend: B,
}

impl<B: PhotoBackend> UploadController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Run one upload against the view. `photo` is `None` when no file was
    /// selected; `labels_text` is passed through after trimming.
    pub async fn upload<V: GalleryView + ?Sized>(
        &self,
        photo: Option<PhotoUpload>,
        labels_text: &str,
        view: &mut V,
    ) {
        view.set_error_detail("");
        view.set_upload_status("");

        let Some(photo) = photo else {
            view.set_upload_status("Please choose an image file.");
            return;
        };
        let custom_labels = labels_text.trim();

        view.set_upload_status("Uploading…");

        match self.backend.upload(photo, custom_labels).await {
            Ok(()) => {
                view.set_upload_status(
                    "Uploaded! Wait a few seconds, then try searching using one of your labels.",
                );
                view.reset_upload_form();
            }
            Err(PhotoApiError::UnexpectedStatus { status, body }) => {
                error!(%status, %body, "upload rejected");
                view.set_upload_status(&format!("Upload failed ({}).", status.as_u16()));
                view.set_error_detail("Upload failed – see logs for details.");
            }
            Err(err) => {
                error!(error = %err, "upload failed");
                view.set_upload_status("Upload error – see logs.");
                view.set_error_detail("Upload error – check logs.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_view::{RecordingView, ViewEvent};
    use photo_api::{MockPhotoBackend, StatusCode};

    fn unnamed_png() -> PhotoUpload {
        PhotoUpload {
            file_name: "a b.png".to_string(),
            content_type: None,
            bytes: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn no_file_prompts_without_network_call() {
        let mut backend = MockPhotoBackend::new();
        backend.expect_upload().times(0);
        let controller = UploadController::new(backend);
        let mut view = RecordingView::default();

        controller.upload(None, "beach", &mut view).await;

        assert_eq!(
            view.last_upload_status(),
            Some("Please choose an image file.")
        );
        assert!(!view.events.contains(&ViewEvent::ResetUploadForm));
    }

    #[tokio::test]
    async fn labels_are_trimmed_before_sending() {
        let mut backend = MockPhotoBackend::new();
        backend
            .expect_upload()
            .withf(|photo, labels| photo.file_name == "a b.png" && labels == "beach, sunset")
            .returning(|_, _| Ok(()));
        let controller = UploadController::new(backend);
        let mut view = RecordingView::default();

        controller
            .upload(Some(unnamed_png()), "  beach, sunset  ", &mut view)
            .await;

        assert_eq!(
            view.last_upload_status(),
            Some("Uploaded! Wait a few seconds, then try searching using one of your labels.")
        );
        assert_eq!(view.events.last(), Some(&ViewEvent::ResetUploadForm));
    }

    #[tokio::test]
    async fn empty_labels_are_still_sent() {
        let mut backend = MockPhotoBackend::new();
        backend
            .expect_upload()
            .withf(|_, labels| labels.is_empty())
            .returning(|_, _| Ok(()));
        let controller = UploadController::new(backend);
        let mut view = RecordingView::default();

        controller.upload(Some(unnamed_png()), "   ", &mut view).await;

        assert_eq!(view.events.last(), Some(&ViewEvent::ResetUploadForm));
    }

    #[tokio::test]
    async fn rejected_upload_reports_status_code() {
        let mut backend = MockPhotoBackend::new();
        backend.expect_upload().returning(|_, _| {
            Err(PhotoApiError::UnexpectedStatus {
                status: StatusCode::FORBIDDEN,
                body: "denied".to_string(),
            })
        });
        let controller = UploadController::new(backend);
        let mut view = RecordingView::default();

        controller.upload(Some(unnamed_png()), "", &mut view).await;

        assert_eq!(view.last_upload_status(), Some("Upload failed (403)."));
        assert_eq!(
            view.last_error_detail(),
            Some("Upload failed – see logs for details.")
        );
        assert!(!view.events.contains(&ViewEvent::ResetUploadForm));
    }

    #[tokio::test]
    async fn transport_error_is_generic() {
        let mut backend = MockPhotoBackend::new();
        backend
            .expect_upload()
            .returning(|_, _| Err(PhotoApiError::Io(std::io::Error::other("net down"))));
        let controller = UploadController::new(backend);
        let mut view = RecordingView::default();

        controller.upload(Some(unnamed_png()), "", &mut view).await;

        assert_eq!(view.last_upload_status(), Some("Upload error – see logs."));
        assert_eq!(view.last_error_detail(), Some("Upload error – check logs."));
    }
}
