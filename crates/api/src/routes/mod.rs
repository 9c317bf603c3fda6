pub mod assessments;
pub mod guide;
pub mod reports;
pub mod symptoms;
