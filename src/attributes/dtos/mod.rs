pub mod update_attribute_dto;
