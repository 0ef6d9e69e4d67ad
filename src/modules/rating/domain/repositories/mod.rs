pub mod rating_repository;
