pub mod photographers_api;
