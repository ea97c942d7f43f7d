
mod app_tests;
mod cli_context_tests;
mod controller_tests;
mod formatting_tests;
mod http_tests;
mod logging_tests;
mod masks_tests;
