pub mod pg_table_source;
