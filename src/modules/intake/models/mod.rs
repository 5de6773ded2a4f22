pub mod intake_record;

pub use intake_record::{IntakeRecord, NewIntakeRecord};
