pub mod mock;
pub mod repository;

pub use mock::MockAccountRepository;
pub use repository::AccountRepository;
