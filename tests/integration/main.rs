//! Integration tests for termscribe

mod canvas_test;
mod cli_test;
mod program_test;
