// Listing form: tracks the three fields of a new listing and submits
// them to the backend. Field updates and the submit guard live here so
// the interactive layer stays a thin wrapper around prompts.

use std::path::PathBuf;

use crate::api::ApiClient;

/// The raw form state: two text fields plus an optionally selected
/// image file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValue {
    pub name: String,
    pub category: String,
    pub image: Option<PathBuf>,
}

/// A single field update. The image variant carries what the picker
/// yielded: the first chosen file, or `None` when nothing was selected.
#[derive(Debug, Clone)]
pub enum Field {
    Name(String),
    Category(String),
    Image(Option<PathBuf>),
}

impl FormValue {
    /// Produce a new FormValue with only the given field replaced.
    pub fn with_field(&self, field: Field) -> FormValue {
        let mut next = self.clone();
        match field {
            Field::Name(name) => next.name = name,
            Field::Category(category) => next.category = category,
            Field::Image(image) => next.image = image,
        }
        next
    }
}

/// What became of a submit attempt. Failures are terminal for the
/// attempt; the user may simply submit again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No image selected; nothing was sent.
    MissingImage,
    /// The backend accepted the listing.
    Listed,
    /// Transport error, error status, or unparseable response body.
    Failed,
}

/// The listing form itself. Owns its field state and an optional
/// zero-argument callback fired after a successful round-trip.
#[derive(Default)]
pub struct ListingForm {
    values: FormValue,
    on_listing_completed: Option<Box<dyn FnMut()>>,
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked once per successful submission.
    pub fn on_listing_completed(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_listing_completed = Some(Box::new(callback));
        self
    }

    /// Apply one field update, replacing the whole FormValue.
    pub fn set_field(&mut self, field: Field) {
        self.values = self.values.with_field(field);
    }

    pub fn values(&self) -> &FormValue {
        &self.values
    }

    /// Submit the current fields as one multipart POST. Without an image
    /// the attempt is abandoned before any network call. Errors never
    /// escape: they are logged and reported through the outcome only.
    pub fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        let Some(image) = self.values.image.clone() else {
            return SubmitOutcome::MissingImage;
        };
        match api.add_item(&self.values.name, &self.values.category, &image) {
            Ok(body) => {
                tracing::info!("POST success: {}", body);
                if let Some(callback) = self.on_listing_completed.as_mut() {
                    callback();
                }
                SubmitOutcome::Listed
            }
            Err(err) => {
                tracing::error!("POST error: {:#}", err);
                SubmitOutcome::Failed
            }
        }
    }
}
