mod blocks_tests;
mod commands_tests;
mod render_tests;
