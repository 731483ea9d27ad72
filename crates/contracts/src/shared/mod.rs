pub mod numeric;
pub mod validation;
