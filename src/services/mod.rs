pub mod population_api;
