//! Driver File Repository Implementations

mod postgres;

pub use postgres::PostgresDriverDetailRepository;
