mod export_tests;
mod index_tests;
mod listing_tests;
