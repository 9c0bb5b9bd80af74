//! Typed facades over the backend's resource endpoints.
//!
//! Each facade borrows the [`ApiClient`](crate::ApiClient) and maps one
//! backend resource family onto domain types.

mod billing;
mod flags;
mod flows;
mod hotels;
mod staff;
mod stats;
mod templates;

pub use billing::BillingApi;
pub use flags::FlagsApi;
pub use flows::FlowsApi;
pub use hotels::HotelsApi;
pub use staff::StaffApi;
pub use stats::StatsApi;
pub use templates::TemplatesApi;

use lobbydesk_domain::{ClientError, ClientResult};
use reqwest::multipart::Part;

/// Builds a file part with a MIME type guessed from the file name.
fn file_part(file_name: &str, bytes: &[u8]) -> ClientResult<Part> {
    let mime: mime::Mime = mime_guess::from_path(file_name).first_or_octet_stream();
    Part::bytes(bytes.to_vec())
        .file_name(file_name.to_owned())
        .mime_str(mime.essence_str())
        .map_err(|err| ClientError::Api {
            status: 0,
            message: err.to_string(),
            body: None,
        })
}
