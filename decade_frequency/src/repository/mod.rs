pub mod dpla_repository_impl;

#[cfg(test)]
pub mod scripted_dpla_repository;
