mod common;
mod config_loading;
mod round_trip;
