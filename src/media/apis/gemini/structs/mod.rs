pub mod generate_content_response;
