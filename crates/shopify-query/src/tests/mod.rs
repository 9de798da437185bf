mod query_request_builder_tests;
mod render_tests;
mod utils;
