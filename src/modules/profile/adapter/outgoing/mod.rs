pub mod sea_orm_entity;

mod profile_query_postgres;
mod profile_repository_postgres;

pub use profile_query_postgres::ProfileQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
