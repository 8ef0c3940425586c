mod daybook;

pub use daybook::{ApiErrorBody, ApiErrorObject, DaybookError};
