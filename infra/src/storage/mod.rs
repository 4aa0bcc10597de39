//! Object storage: Supabase-style REST client and a mock

pub mod mock_storage;
pub mod supabase;

pub use mock_storage::MockObjectStorage;
pub use supabase::SupabaseStorage;
