pub mod order_repo;
