mod integration_seed_utility;
mod unit_config;
