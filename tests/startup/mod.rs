mod check_schema_conflicts;
mod connect_to_database;
mod materialize_schema;
