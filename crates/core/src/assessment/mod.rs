mod schema;
pub use schema::{ASSESSMENT_RESPONSE_SCHEMA, SUBMIT_ASSESSMENT_SCHEMA};

mod types;
pub use types::*;
