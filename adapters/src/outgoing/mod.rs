pub mod postgrest_reqwest;
