//! Reading the chosen reaction image out of a file input.

use leptos::html::Input;
use leptos::prelude::*;

use labnote::types::ImageUpload;

/// First selected file of `input`, if any.
pub fn first_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// Read `file` fully into memory for upload.
///
/// # Errors
///
/// Returns the browser's read error if the file cannot be read.
pub async fn read_image(file: web_sys::File) -> Result<ImageUpload, gloo_file::FileReadError> {
    let file = gloo_file::File::from(file);
    let bytes = gloo_file::futures::read_as_bytes(&file).await?;
    Ok(ImageUpload { file_name: file.name(), content_type: file.raw_mime_type(), bytes })
}

/// Read the file `input` holds right now, or `None` if it is empty or unmounted.
///
/// # Errors
///
/// Returns the browser's read error if the chosen file cannot be read.
pub async fn read_selected(input: NodeRef<Input>) -> Result<Option<ImageUpload>, gloo_file::FileReadError> {
    let Some(file) = input.get_untracked().and_then(|el| first_file(&el)) else {
        return Ok(None);
    };
    read_image(file).await.map(Some)
}

/// Empty the native file input.
pub fn clear_selection(input: NodeRef<Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}
