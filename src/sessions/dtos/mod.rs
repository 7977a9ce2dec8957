pub mod submit_session_dto;
