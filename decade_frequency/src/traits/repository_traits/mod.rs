pub mod dpla_repository;
