pub mod additional_field;
