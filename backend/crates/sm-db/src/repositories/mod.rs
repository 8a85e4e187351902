pub mod media_repository;
pub mod option_repository;
pub mod post_repository;
pub mod term_repository;
pub mod user_repository;
