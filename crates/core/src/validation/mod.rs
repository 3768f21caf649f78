mod rule;
pub use rule::{FieldKind, FieldRule};

mod schema;
pub use schema::Schema;

mod violation;
pub use violation::{SchemaViolation, ROOT_LABEL};
