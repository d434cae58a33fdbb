
mod byte_order_tests;
mod dataset_tests;
mod dictionary_tests;
