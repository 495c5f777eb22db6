//! Loading order forms from JSON.
//!
//! The file is a plain array of forms, each with the same keys as a stored order
//! minus `id`:
//!
//! ```json
//! [
//!   { "name": "Ada", "cheese_slices": 10, "pepperoni_slices": 5 },
//!   { "name": "Grace", "cheese_slices": 0, "pepperoni_slices": 3, "paid": true }
//! ]
//! ```
//!
//! Forms are not validated here. The client checks each one as it is placed, so
//! one bad entry does not stop the rest.

use crate::error::PartyError;
use pizza_core::OrderForm;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub fn read_forms(reader: impl Read) -> Result<Vec<OrderForm>, PartyError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_forms(path: impl AsRef<Path>) -> Result<Vec<OrderForm>, PartyError> {
    let path = path.as_ref();
    let forms = read_forms(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), count = forms.len(), "Loaded order forms");
    Ok(forms)
}
