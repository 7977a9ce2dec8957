pub mod attribute_field;
