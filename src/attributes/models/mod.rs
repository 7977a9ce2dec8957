pub mod attribute_set;
