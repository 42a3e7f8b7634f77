mod capture_tests;
mod coords_tests;
mod export_tests;
